//! Conversion traits for lifting values and errors into [`ErrorOr`].
//!
//! # Implementations
//!
//! [`IntoErrorOr`] is implemented for:
//! - [`Error`] and [`Errors`] - become the error state
//! - `Vec<Error>` - becomes the error state, panics when empty
//! - `Result<T, Error>` / `Result<T, Errors>` - `Ok` maps to the value
//!
//! [`ToErrorOr`] wraps any value as a success.
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{IntoErrorOr, ToErrorOr};
//! use error_or::{Error, ErrorOr};
//!
//! let ok: ErrorOr<i32> = 5.to_error_or();
//! let failed: ErrorOr<i32> = Error::conflict("User.Exists", "already registered").into_error_or();
//! let from_result: ErrorOr<i32> = Ok::<_, Error>(1).into_error_or();
//!
//! assert!(ok.is_value());
//! assert!(failed.is_error());
//! assert_eq!(from_result.into_value(), Some(1));
//! ```
use crate::error_or::ErrorOr;
use crate::types::alloc_type::Vec;
use crate::types::{Error, Errors};

/// Converts an error or a `Result` into an [`ErrorOr`].
pub trait IntoErrorOr<T> {
    fn into_error_or(self) -> ErrorOr<T>;
}

impl<T> IntoErrorOr<T> for Error {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::from_error(self)
    }
}

impl<T> IntoErrorOr<T> for Errors {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::Errors(self)
    }
}

impl<T> IntoErrorOr<T> for Vec<Error> {
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::from_errors(self)
    }
}

impl<T> IntoErrorOr<T> for Result<T, Error> {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        match self {
            Ok(value) => ErrorOr::Value(value),
            Err(error) => ErrorOr::from_error(error),
        }
    }
}

impl<T> IntoErrorOr<T> for Result<T, Errors> {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        match self {
            Ok(value) => ErrorOr::Value(value),
            Err(errors) => ErrorOr::Errors(errors),
        }
    }
}

/// Wraps any value as the success state.
pub trait ToErrorOr: Sized {
    #[inline]
    fn to_error_or(self) -> ErrorOr<Self> {
        ErrorOr::Value(self)
    }
}

impl<T> ToErrorOr for T {}
