use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of an [`Error`](crate::types::Error).
///
/// The seven built-in kinds cover the failures most services report. `Custom`
/// carries a caller-chosen number for anything else.
///
/// Every kind has a stable numeric representation: the built-in kinds occupy
/// `0..=6` in declaration order and [`ErrorKind::from_numeric`] folds those
/// numbers back onto the built-in variants, so `Custom(3)` is never produced
/// by the constructors. Equality, ordering and hashing go through that
/// number, so a hand-built `Custom(3)` is the same kind as `Conflict`. With the
/// `serde` feature a kind is written as its number.
///
/// # Examples
///
/// ```
/// use error_or::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.numeric(), 4);
/// assert_eq!(ErrorKind::from_numeric(4), ErrorKind::NotFound);
/// assert_eq!(ErrorKind::from_numeric(42), ErrorKind::Custom(42));
/// assert_eq!(ErrorKind::Custom(3), ErrorKind::Conflict);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "u32", into = "u32")
)]
#[derive(Debug, Clone, Copy)]
pub enum ErrorKind {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
    Custom(u32),
}

impl ErrorKind {
    /// Maps a numeric kind onto its variant.
    #[inline]
    pub const fn from_numeric(value: u32) -> Self {
        match value {
            0 => Self::Failure,
            1 => Self::Unexpected,
            2 => Self::Validation,
            3 => Self::Conflict,
            4 => Self::NotFound,
            5 => Self::Unauthorized,
            6 => Self::Forbidden,
            other => Self::Custom(other),
        }
    }

    /// Returns the numeric representation of this kind.
    #[inline]
    pub const fn numeric(self) -> u32 {
        match self {
            Self::Failure => 0,
            Self::Unexpected => 1,
            Self::Validation => 2,
            Self::Conflict => 3,
            Self::NotFound => 4,
            Self::Unauthorized => 5,
            Self::Forbidden => 6,
            Self::Custom(value) => value,
        }
    }

    /// Folds a hand-built `Custom(0..=6)` onto its built-in variant.
    #[inline]
    pub const fn normalized(self) -> Self {
        Self::from_numeric(self.numeric())
    }

    /// Returns `true` for caller-defined kinds.
    #[inline]
    pub const fn is_custom(self) -> bool {
        matches!(self.normalized(), Self::Custom(_))
    }

    /// Code used by [`Error::of_kind`](crate::types::Error::of_kind).
    pub const fn default_code(self) -> &'static str {
        match self.normalized() {
            Self::Failure => "General.Failure",
            Self::Unexpected => "General.Unexpected",
            Self::Validation => "General.Validation",
            Self::Conflict => "General.Conflict",
            Self::NotFound => "General.NotFound",
            Self::Unauthorized => "General.Unauthorized",
            Self::Forbidden => "General.Forbidden",
            Self::Custom(_) => "General.Custom",
        }
    }

    /// Description used by [`Error::of_kind`](crate::types::Error::of_kind).
    pub const fn default_description(self) -> &'static str {
        match self.normalized() {
            Self::Failure => "A failure has occurred.",
            Self::Unexpected => "An unexpected error has occurred.",
            Self::Validation => "A validation error has occurred.",
            Self::Conflict => "A conflict error has occurred.",
            Self::NotFound => "A 'Not Found' error has occurred.",
            Self::Unauthorized => "An 'Unauthorized' error has occurred.",
            Self::Forbidden => "A 'Forbidden' error has occurred.",
            Self::Custom(_) => "A custom error has occurred.",
        }
    }

    const fn name(self) -> &'static str {
        match self.normalized() {
            Self::Failure => "Failure",
            Self::Unexpected => "Unexpected",
            Self::Validation => "Validation",
            Self::Conflict => "Conflict",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::Custom(_) => "Custom",
        }
    }
}

impl PartialEq for ErrorKind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numeric() == other.numeric()
    }
}

impl Eq for ErrorKind {}

impl PartialOrd for ErrorKind {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorKind {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric().cmp(&other.numeric())
    }
}

impl Hash for ErrorKind {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric().hash(state);
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            Self::Custom(value) => write!(f, "Custom({value})"),
            other => f.write_str(other.name()),
        }
    }
}

impl From<u32> for ErrorKind {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_numeric(value)
    }
}

impl From<ErrorKind> for u32 {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        kind.numeric()
    }
}
