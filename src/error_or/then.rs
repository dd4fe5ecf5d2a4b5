//! Chaining over the success branch.
//!
//! Every method here short-circuits: in the error state the callback is never
//! invoked and the errors travel on unchanged. The `*_with_metadata` forms
//! additionally overwrite the metadata of those propagated errors. Errors that
//! the callback itself produces are returned as-is.
use super::core::ErrorOr;
use crate::types::Metadata;

impl<T> ErrorOr<T> {
    /// Feeds the value into a fallible next step.
    ///
    /// This is the monadic bind: on success the result of `f` is returned
    /// verbatim, on error `f` is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// fn parse_even(input: i32) -> ErrorOr<i32> {
    ///     if input % 2 == 0 {
    ///         ErrorOr::from_value(input)
    ///     } else {
    ///         ErrorOr::from_error(Error::validation("Number.Odd", "not even"))
    ///     }
    /// }
    ///
    /// assert_eq!(ErrorOr::from_value(4).then(parse_even).into_value(), Some(4));
    /// assert!(ErrorOr::from_value(3).then(parse_even).is_error());
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Transforms the value with an infallible function.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let a = ErrorOr::from_value(5);
    /// assert_eq!(*a.then_map(|x| x + 1).value(), 6);
    /// ```
    #[inline]
    pub fn then_map<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => ErrorOr::Value(f(value)),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Runs `f` for its side effect on success and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let mut seen = None;
    /// let v = ErrorOr::from_value(7).then_do(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(v.into_value(), Some(7));
    /// ```
    #[inline]
    pub fn then_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = &self {
            f(value);
        }
        self
    }

    /// [`ErrorOr::then`] that stamps `metadata` onto propagated errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr, Metadata};
    ///
    /// let meta = Metadata::new().with("stage", "parse");
    /// let failed = ErrorOr::<i32>::from_error(Error::failure("F", "failed"))
    ///     .then_with_metadata(|x| ErrorOr::from_value(x + 1), meta.clone());
    /// assert_eq!(failed.first_error().metadata(), Some(&meta));
    /// ```
    #[inline]
    pub fn then_with_metadata<U, F>(self, f: F, metadata: Metadata) -> ErrorOr<U>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        self.with_error_metadata(metadata).then(f)
    }

    /// [`ErrorOr::then_map`] that stamps `metadata` onto propagated errors.
    #[inline]
    pub fn then_map_with_metadata<U, F>(self, f: F, metadata: Metadata) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        self.with_error_metadata(metadata).then_map(f)
    }

    /// [`ErrorOr::then_do`] that stamps `metadata` onto propagated errors.
    #[inline]
    pub fn then_do_with_metadata<F>(self, f: F, metadata: Metadata) -> Self
    where
        F: FnOnce(&T),
    {
        self.with_error_metadata(metadata).then_do(f)
    }
}
