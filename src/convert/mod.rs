//! Conversion helpers between `Result`, `Option`, and [`ErrorOr`].
//!
//! These adapters make it straightforward to incrementally adopt `error-or`
//! by wrapping existing `Result`-returning code, or by flattening an
//! [`ErrorOr`] back into a `Result` when talking to external APIs.
//!
//! # Examples
//!
//! ```
//! use error_or::convert::*;
//! use error_or::{Error, ErrorOr};
//!
//! let result: Result<i32, Error> = Ok(42);
//! let error_or = result_to_error_or(result);
//! assert!(error_or.is_value());
//!
//! let back = error_or_to_result(ErrorOr::<i32>::from_error(Error::failure("F", "failed")));
//! assert_eq!(back.unwrap_err().len(), 1);
//! ```

use crate::error_or::ErrorOr;
use crate::types::{Error, Errors};

/// Converts an [`ErrorOr`] into a `Result` that keeps every error.
///
/// # Examples
///
/// ```
/// use error_or::convert::error_or_to_result;
/// use error_or::ErrorOr;
///
/// assert_eq!(error_or_to_result(ErrorOr::from_value(1)).ok(), Some(1));
/// ```
#[inline]
pub fn error_or_to_result<T>(error_or: ErrorOr<T>) -> Result<T, Errors> {
    error_or.into_result()
}

/// Converts a single-error `Result` into an [`ErrorOr`].
#[inline]
pub fn result_to_error_or<T>(result: Result<T, Error>) -> ErrorOr<T> {
    match result {
        Ok(value) => ErrorOr::Value(value),
        Err(error) => ErrorOr::from_error(error),
    }
}

/// Converts a `Result` with an arbitrary error type, mapping the error through `f`.
///
/// # Examples
///
/// ```
/// use error_or::convert::result_map_to_error_or;
/// use error_or::Error;
///
/// let parsed = result_map_to_error_or("x1".parse::<u8>(), |e| {
///     Error::validation("Input.Parse", e.to_string())
/// });
/// assert_eq!(parsed.first_error().code(), "Input.Parse");
/// ```
#[inline]
pub fn result_map_to_error_or<T, E, F>(result: Result<T, E>, f: F) -> ErrorOr<T>
where
    F: FnOnce(E) -> Error,
{
    match result {
        Ok(value) => ErrorOr::Value(value),
        Err(error) => ErrorOr::from_error(f(error)),
    }
}

/// Converts an `Option`, using `error_if_none` for the absent case.
///
/// # Examples
///
/// ```
/// use error_or::convert::option_to_error_or;
/// use error_or::Error;
///
/// let user = option_to_error_or(None::<u32>, Error::not_found("User.NotFound", "no such user"));
/// assert!(user.is_error());
/// ```
#[inline]
pub fn option_to_error_or<T>(option: Option<T>, error_if_none: Error) -> ErrorOr<T> {
    match option {
        Some(value) => ErrorOr::Value(value),
        None => ErrorOr::from_error(error_if_none),
    }
}

/// Collects an iterator of results into one, accumulating every error.
///
/// Equivalent to `.collect::<ErrorOr<Vec<T>>>()`.
#[inline]
pub fn collect_error_or<T, I>(items: I) -> ErrorOr<crate::types::alloc_type::Vec<T>>
where
    I: IntoIterator<Item = ErrorOr<T>>,
{
    items.into_iter().collect()
}

impl<T> From<Error> for ErrorOr<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Errors> for ErrorOr<T> {
    #[inline]
    fn from(errors: Errors) -> Self {
        Self::Errors(errors)
    }
}

impl<T> From<Result<T, Error>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        result_to_error_or(result)
    }
}

impl<T> From<Result<T, Errors>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, Errors>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(errors) => Self::Errors(errors),
        }
    }
}

impl<T> From<ErrorOr<T>> for Result<T, Errors> {
    #[inline]
    fn from(error_or: ErrorOr<T>) -> Self {
        error_or.into_result()
    }
}
