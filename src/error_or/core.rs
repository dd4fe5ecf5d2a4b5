use crate::types::alloc_type::Vec;
use crate::types::{Error, Errors, Metadata};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of an operation: a value, or one or more [`Error`]s.
///
/// `ErrorOr<T>` replaces panics and ad-hoc error plumbing with an explicit,
/// inspectable return value. Unlike `Result<T, E>` the error branch always
/// holds a non-empty, ordered list, so independent failures can be collected
/// and reported together.
///
/// There is no default or "empty" state. Every instance is built through a
/// factory ([`ErrorOr::from_value`], [`ErrorOr::from_error`],
/// [`ErrorOr::from_errors`], ...) or by naming a variant directly.
///
/// # Serde Support
///
/// With the `serde` feature `ErrorOr` serializes as an externally tagged enum
/// (`{"Value": ...}` / `{"Errors": [...]}`). Deserializing an empty error list
/// fails.
///
/// # Variants
///
/// * `Value(T)` - The produced value
/// * `Errors(Errors)` - One or more errors
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// let ok = ErrorOr::from_value(5);
/// assert!(ok.is_value());
/// assert_eq!(*ok.value(), 5);
///
/// let failed = ErrorOr::<i32>::from_error(Error::validation("E1", "bad"));
/// assert!(failed.is_error());
/// assert_eq!(failed.first_error().code(), "E1");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOr<T> {
    Value(T),
    Errors(Errors),
}

impl<T> ErrorOr<T> {
    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let v = ErrorOr::from_value("ready");
    /// assert_eq!(v.into_value(), Some("ready"));
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps a single error.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Errors(Errors::new(error))
    }

    /// Wraps an ordered sequence of errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields nothing. An empty error list is a bug in the
    /// caller, not a domain failure; use [`Errors::try_from_iter`] to check
    /// untrusted input first.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let v = ErrorOr::<()>::from_errors([
    ///     Error::validation("Name.Empty", "name is required"),
    ///     Error::validation("Age.Negative", "age must be positive"),
    /// ]);
    /// assert_eq!(v.errors().len(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use error_or::{Error, ErrorOr};
    ///
    /// let _ = ErrorOr::<()>::from_errors(Vec::<Error>::new());
    /// ```
    #[track_caller]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Errors::try_from_iter(errors) {
            Ok(errors) => Self::Errors(errors),
            Err(_) => panic!("cannot construct ErrorOr from an empty error list"),
        }
    }

    /// Builds an instance from a value/errors pair where either side may be absent.
    ///
    /// Errors win when both are supplied. An empty error list counts as absent.
    ///
    /// # Panics
    ///
    /// Panics when neither a value nor a non-empty error list is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let v = ErrorOr::from_tuple(Some(1), None);
    /// assert_eq!(v.into_value(), Some(1));
    ///
    /// let e = ErrorOr::from_tuple(Some(1), Some(vec![Error::failure("F", "failed")]));
    /// assert!(e.is_error());
    /// ```
    #[track_caller]
    pub fn from_tuple(value: Option<T>, errors: Option<Vec<Error>>) -> Self {
        if let Some(errors) = errors.and_then(|errors| Errors::try_from(errors).ok()) {
            return Self::Errors(errors);
        }

        match value {
            Some(value) => Self::Value(value),
            None => panic!("cannot construct ErrorOr when neither a value nor errors are present"),
        }
    }

    /// Adapts any external result shape through a pair of selectors.
    ///
    /// Applies the same precedence as [`ErrorOr::from_tuple`].
    ///
    /// # Panics
    ///
    /// Panics when both selectors come back empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// struct Legacy {
    ///     payload: Option<u32>,
    ///     problems: Vec<Error>,
    /// }
    ///
    /// let legacy = Legacy { payload: Some(3), problems: Vec::new() };
    /// let v = ErrorOr::from_custom(
    ///     legacy,
    ///     |l| l.payload,
    ///     |l| Some(l.problems.clone()),
    /// );
    /// assert_eq!(v.into_value(), Some(3));
    /// ```
    #[track_caller]
    pub fn from_custom<S, V, E>(source: S, value_selector: V, errors_selector: E) -> Self
    where
        V: FnOnce(&S) -> Option<T>,
        E: FnOnce(&S) -> Option<Vec<Error>>,
    {
        let errors = errors_selector(&source);
        let value = value_selector(&source);
        Self::from_tuple(value, errors)
    }

    /// Returns `true` if this holds a value.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this holds errors.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_value()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics in the error state. Check [`ErrorOr::is_value`] first or use
    /// [`ErrorOr::as_value`].
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Errors(_) => panic!("cannot read the value of an ErrorOr in the error state"),
        }
    }

    /// Returns the error list.
    ///
    /// # Panics
    ///
    /// Panics in the success state. Check [`ErrorOr::is_error`] first or use
    /// [`ErrorOr::as_errors`].
    #[track_caller]
    #[inline]
    pub fn errors(&self) -> &Errors {
        match self {
            Self::Errors(errors) => errors,
            Self::Value(_) => panic!("cannot read the errors of an ErrorOr in the success state"),
        }
    }

    /// Returns the error at index 0.
    ///
    /// # Panics
    ///
    /// Panics in the success state.
    #[track_caller]
    #[inline]
    pub fn first_error(&self) -> &Error {
        match self {
            Self::Errors(errors) => errors.first(),
            Self::Value(_) => {
                panic!("cannot read the first error of an ErrorOr in the success state")
            },
        }
    }

    /// Returns the errors, or an empty slice in the success state.
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// assert!(ErrorOr::from_value(1).errors_or_empty().is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn errors_or_empty(&self) -> &[Error] {
        match self {
            Self::Value(_) => &[],
            Self::Errors(errors) => errors.as_slice(),
        }
    }

    #[must_use]
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Errors(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn as_errors(&self) -> Option<&Errors> {
        match self {
            Self::Value(_) => None,
            Self::Errors(errors) => Some(errors),
        }
    }

    /// Extracts the value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Errors(_) => None,
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Value(_) => None,
            Self::Errors(errors) => Some(errors),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Errors(errors) => Err(errors),
        }
    }

    /// Overwrites the metadata of every error when in the error state.
    ///
    /// A success passes through untouched. This is the primitive behind every
    /// `*_with_metadata` combinator.
    ///
    /// ```
    /// use error_or::{Error, ErrorOr, Metadata};
    ///
    /// let meta = Metadata::new().with("step", "load");
    /// let failed = ErrorOr::<()>::from_error(Error::failure("F", "failed"))
    ///     .with_error_metadata(meta.clone());
    /// assert_eq!(failed.first_error().metadata(), Some(&meta));
    /// ```
    #[inline]
    pub fn with_error_metadata(self, metadata: Metadata) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::Errors(errors.into_with_metadata(&metadata)),
        }
    }
}
