//! Turning a success into a failure based on a predicate.
use super::core::ErrorOr;
use crate::types::{Error, Metadata};

impl<T> ErrorOr<T> {
    /// Fails with `error` when `predicate` holds for the value.
    ///
    /// Already-failed instances are returned unchanged and the predicate is
    /// not evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let too_big = Error::validation("Number.TooBig", "must be at most 10");
    ///
    /// let ok = ErrorOr::from_value(3).fail_if(|x| *x > 10, too_big.clone());
    /// assert_eq!(ok.into_value(), Some(3));
    ///
    /// let failed = ErrorOr::from_value(42).fail_if(|x| *x > 10, too_big.clone());
    /// assert_eq!(failed.first_error(), &too_big);
    /// ```
    #[inline]
    pub fn fail_if<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.fail_if_with(predicate, move |_| error)
    }

    /// Fails with an error built from the value when `predicate` holds.
    ///
    /// `error_builder` only runs when the predicate is true, so nothing is
    /// allocated on the success path.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let failed = ErrorOr::from_value(-5).fail_if_with(
    ///     |x| *x < 0,
    ///     |x| Error::validation("Number.Negative", format!("{x} is negative")),
    /// );
    /// assert_eq!(failed.first_error().description(), "-5 is negative");
    /// ```
    #[inline]
    pub fn fail_if_with<P, B>(self, predicate: P, error_builder: B) -> Self
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value) {
                    Self::from_error(error_builder(&value))
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    /// [`ErrorOr::fail_if`] that stamps `metadata` onto propagated errors.
    ///
    /// The error raised by a failing predicate is left as supplied.
    #[inline]
    pub fn fail_if_with_metadata<P>(self, predicate: P, error: Error, metadata: Metadata) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.with_error_metadata(metadata).fail_if(predicate, error)
    }

    /// [`ErrorOr::fail_if_with`] that stamps `metadata` onto propagated errors.
    #[inline]
    pub fn fail_if_with_with_metadata<P, B>(
        self,
        predicate: P,
        error_builder: B,
        metadata: Metadata,
    ) -> Self
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        self.with_error_metadata(metadata).fail_if_with(predicate, error_builder)
    }
}
