//! The structured error record carried by [`ErrorOr`](crate::ErrorOr).
use core::fmt::{self, Display};

use crate::types::alloc_type::Cow;
use crate::types::error_kind::ErrorKind;
use crate::types::metadata::Metadata;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One failure: a kind, a short code, a human readable description and
/// optional metadata.
///
/// `Error` is immutable. Attaching metadata produces a new value with the same
/// kind, code and description.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorKind, Metadata};
///
/// let err = Error::not_found("User.NotFound", "user 42 does not exist");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.code(), "User.NotFound");
/// assert!(err.metadata().is_none());
///
/// let tagged = err.with_metadata(Metadata::new().with("user_id", 42));
/// assert_eq!(tagged.code(), err.code());
/// assert!(err.metadata().is_none());
/// assert!(tagged.metadata().is_some());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    code: Cow<'static, str>,
    description: Cow<'static, str>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    metadata: Option<Metadata>,
}

impl Error {
    /// Creates an error of the given kind without metadata.
    ///
    /// A `Custom` kind whose number belongs to a built-in kind is stored as
    /// that built-in kind.
    #[inline]
    pub fn new<C, D>(kind: ErrorKind, code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self {
            kind: kind.normalized(),
            code: code.into(),
            description: description.into(),
            metadata: None,
        }
    }

    /// Creates an error carrying the kind's default code and description.
    ///
    /// ```
    /// use error_or::{Error, ErrorKind};
    ///
    /// let err = Error::of_kind(ErrorKind::Conflict);
    /// assert_eq!(err.code(), "General.Conflict");
    /// assert_eq!(err.description(), "A conflict error has occurred.");
    /// ```
    #[inline]
    pub fn of_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_code(), kind.default_description())
    }

    #[inline]
    pub fn failure<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Failure, code, description)
    }

    #[inline]
    pub fn unexpected<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Unexpected, code, description)
    }

    #[inline]
    pub fn validation<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Validation, code, description)
    }

    #[inline]
    pub fn conflict<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Conflict, code, description)
    }

    #[inline]
    pub fn not_found<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::NotFound, code, description)
    }

    #[inline]
    pub fn unauthorized<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Unauthorized, code, description)
    }

    #[inline]
    pub fn forbidden<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Forbidden, code, description)
    }

    /// Creates an error from a numeric kind.
    ///
    /// Numbers `0..=6` resolve to the built-in kinds, everything else becomes
    /// [`ErrorKind::Custom`].
    ///
    /// ```
    /// use error_or::{Error, ErrorKind};
    ///
    /// let err = Error::custom(418, "Tea.Pot", "short and stout");
    /// assert_eq!(err.kind(), ErrorKind::Custom(418));
    /// assert_eq!(err.numeric_kind(), 418);
    /// ```
    #[inline]
    pub fn custom<C, D>(kind: u32, code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::from_numeric(kind), code, description)
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn numeric_kind(&self) -> u32 {
        self.kind.numeric()
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns a copy of this error whose metadata is `metadata`.
    ///
    /// Any metadata already present is replaced, not merged.
    #[inline]
    pub fn with_metadata(&self, metadata: Metadata) -> Self {
        Self {
            kind: self.kind,
            code: self.code.clone(),
            description: self.description.clone(),
            metadata: Some(metadata),
        }
    }

    /// Consuming form of [`Error::with_metadata`].
    #[inline]
    pub fn into_with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns a copy of this error without metadata.
    #[inline]
    pub fn without_metadata(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code.clone(),
            description: self.description.clone(),
            metadata: None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl core::error::Error for Error {}
