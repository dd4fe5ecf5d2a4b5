//! Collecting errors from independent results into one.
use super::core::ErrorOr;
use crate::traits::ErrorSource;
use crate::types::{Error, ErrorVec, Errors, Metadata};

impl<T> ErrorOr<T> {
    /// Appends the errors of every failed source in `others` to `self`.
    ///
    /// The combined list is `self`'s errors (none on success) followed by the
    /// errors of each source in argument order. Successful and `None` sources
    /// contribute nothing. If nothing was collected at all, `self` comes back
    /// unchanged, including its value.
    ///
    /// Unlike [`ErrorOr::then`] this never short-circuits, so several
    /// validations can be run up front and reported together.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let success = ErrorOr::from_value(1);
    /// let merged = success.append_errors([ErrorOr::<()>::from_error(Error::validation("V", "bad"))]);
    /// assert_eq!(merged.errors().len(), 1);
    /// assert_eq!(merged.first_error().code(), "V");
    ///
    /// let untouched = ErrorOr::from_value(1).append_errors([ErrorOr::from_value(2)]);
    /// assert_eq!(untouched.into_value(), Some(1));
    /// ```
    pub fn append_errors<I>(self, others: I) -> Self
    where
        I: IntoIterator,
        I::Item: ErrorSource,
    {
        let mut appended: ErrorVec<Error> = ErrorVec::new();
        for other in others {
            appended.extend(other.errors_or_empty().iter().cloned());
        }

        if appended.is_empty() {
            return self;
        }

        match self {
            Self::Value(_) => Self::Errors(Errors::from_non_empty(appended)),
            Self::Errors(errors) => Self::Errors(errors.with_all(appended)),
        }
    }

    /// [`ErrorOr::append_errors`] followed by overwriting the metadata of every
    /// combined error.
    ///
    /// A result that stays in the success state is returned untouched.
    pub fn append_errors_with_metadata<I>(self, others: I, metadata: Metadata) -> Self
    where
        I: IntoIterator,
        I::Item: ErrorSource,
    {
        self.append_errors(others).with_error_metadata(metadata)
    }
}
