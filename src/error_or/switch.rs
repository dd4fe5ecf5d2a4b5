//! Terminal dispatch on the state of an [`ErrorOr`].
//!
//! `switch` and `switch_first` consume the instance and run exactly one
//! callback. `fold` and `fold_first` do the same but hand back the callback's
//! result.
use super::core::ErrorOr;
use crate::types::{Error, Errors, Metadata};

impl<T> ErrorOr<T> {
    /// Runs `on_value` or `on_errors` depending on the state.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    ///
    /// use error_or::{Error, ErrorOr};
    ///
    /// let log = RefCell::new(Vec::new());
    /// ErrorOr::<i32>::from_errors([Error::failure("A", "a"), Error::failure("B", "b")]).switch(
    ///     |value| log.borrow_mut().push(format!("value {value}")),
    ///     |errors| log.borrow_mut().push(format!("{} errors", errors.len())),
    /// );
    /// assert_eq!(log.into_inner(), ["2 errors"]);
    /// ```
    #[inline]
    pub fn switch<V, E>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T),
        E: FnOnce(Errors),
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Errors(errors) => on_errors(errors),
        }
    }

    /// Like [`ErrorOr::switch`], but the error branch only sees the first error.
    #[inline]
    pub fn switch_first<V, E>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Errors(errors) => on_first_error(errors.into_first()),
        }
    }

    /// [`ErrorOr::switch`] after overwriting the metadata of every error.
    #[inline]
    pub fn switch_with_metadata<V, E>(self, on_value: V, on_errors: E, metadata: Metadata)
    where
        V: FnOnce(T),
        E: FnOnce(Errors),
    {
        self.with_error_metadata(metadata).switch(on_value, on_errors);
    }

    /// [`ErrorOr::switch_first`] after overwriting the metadata of every error.
    #[inline]
    pub fn switch_first_with_metadata<V, E>(self, on_value: V, on_first_error: E, metadata: Metadata)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        self.with_error_metadata(metadata)
            .switch_first(on_value, on_first_error);
    }

    /// Maps either branch onto a common result type.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let status = ErrorOr::<&str>::from_error(Error::not_found("User.NotFound", "no such user"))
    ///     .fold(|_| 200, |errors| if errors.len() == 1 { 404 } else { 400 });
    /// assert_eq!(status, 404);
    /// ```
    #[inline]
    pub fn fold<R, V, E>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Errors) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Errors(errors) => on_errors(errors),
        }
    }

    /// Like [`ErrorOr::fold`], but the error branch only sees the first error.
    #[inline]
    pub fn fold_first<R, V, E>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Errors(errors) => on_first_error(errors.into_first()),
        }
    }
}
