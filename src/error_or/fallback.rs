//! Recovering from, or reacting to, the error state.
use super::core::ErrorOr;
use crate::types::Errors;

impl<T> ErrorOr<T> {
    /// Replaces the error state with the outcome of `f`.
    ///
    /// A success passes through without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let cached = ErrorOr::<u32>::from_error(Error::not_found("Cache.Miss", "not cached"))
    ///     .or_else(|_errors| ErrorOr::from_value(10));
    /// assert_eq!(cached.into_value(), Some(10));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Errors) -> ErrorOr<T>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => f(errors),
        }
    }

    /// Turns the error state into a value computed from the errors.
    ///
    /// The result is always a success.
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let count = ErrorOr::<usize>::from_errors([Error::failure("A", "a"), Error::failure("B", "b")])
    ///     .recover(|errors| errors.len());
    /// assert_eq!(count.into_value(), Some(2));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors) -> T,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::Value(f(&errors)),
        }
    }

    /// Returns `self` on success, otherwise a success holding `fallback`.
    #[inline]
    pub fn or_value(self, fallback: T) -> Self {
        self.recover(move |_| fallback)
    }

    /// Runs `f` for its side effect on error and returns `self` unchanged.
    #[inline]
    pub fn else_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors),
    {
        if let Self::Errors(errors) = &self {
            f(errors);
        }
        self
    }
}
