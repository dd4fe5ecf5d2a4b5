//! Anything that may contribute errors to an aggregation.
//!
//! [`ErrorOr::append_errors`](crate::ErrorOr::append_errors) accepts any
//! iterable of [`ErrorSource`]s, which lets a caller merge results whose
//! success types differ:
//!
//! ```
//! use error_or::{traits::ErrorSource, Error, ErrorOr};
//!
//! let name: ErrorOr<String> = ErrorOr::from_error(Error::validation("Name.Empty", "required"));
//! let age: ErrorOr<u8> = ErrorOr::from_error(Error::validation("Age.Range", "out of range"));
//! let missing: Option<ErrorOr<bool>> = None;
//!
//! let sources: [&dyn ErrorSource; 3] = [&name, &age, &missing];
//! let merged = ErrorOr::from_value(()).append_errors(sources);
//!
//! assert_eq!(merged.errors().len(), 2);
//! ```
use crate::error_or::ErrorOr;
use crate::types::{Error, Errors};

/// Exposes the errors a value carries, or none.
///
/// Implemented for [`ErrorOr`] of any success type, [`Errors`], a single
/// [`Error`], references to any of those, and `Option<S>` where `None`
/// contributes nothing.
pub trait ErrorSource {
    /// The errors carried by `self`; empty when there are none.
    fn errors_or_empty(&self) -> &[Error];
}

impl<T> ErrorSource for ErrorOr<T> {
    #[inline]
    fn errors_or_empty(&self) -> &[Error] {
        ErrorOr::errors_or_empty(self)
    }
}

impl ErrorSource for Errors {
    #[inline]
    fn errors_or_empty(&self) -> &[Error] {
        self.as_slice()
    }
}

impl ErrorSource for Error {
    #[inline]
    fn errors_or_empty(&self) -> &[Error] {
        core::slice::from_ref(self)
    }
}

impl<S: ErrorSource> ErrorSource for Option<S> {
    #[inline]
    fn errors_or_empty(&self) -> &[Error] {
        match self {
            Some(source) => source.errors_or_empty(),
            None => &[],
        }
    }
}

impl<S: ErrorSource + ?Sized> ErrorSource for &S {
    #[inline]
    fn errors_or_empty(&self) -> &[Error] {
        (**self).errors_or_empty()
    }
}
