//! Extension trait for `Future<Output = ErrorOr<T>>`.
//!
//! Lets a pipeline keep chaining while the first step is still a future,
//! mirroring the synchronous combinators on [`ErrorOr`].

use core::future::Future;

use crate::error_or::ErrorOr;
use crate::types::{Error, Metadata};

use super::map_future::MapErrorOr;

/// Extension trait for futures that resolve to an [`ErrorOr`].
///
/// # Examples
///
/// ```rust
/// use error_or::prelude_async::*;
///
/// async fn fetch_age() -> ErrorOr<u32> {
///     ErrorOr::from_value(17)
/// }
///
/// async fn example() {
///     let adult = fetch_age()
///         .fail_if(|age| *age < 18, Error::validation("Age.Minor", "must be an adult"))
///         .then_map(|age| age >= 18)
///         .await;
///     assert!(adult.is_error());
/// }
/// ```
pub trait ErrorOrFutureExt<T>: Future<Output = ErrorOr<T>> + Sized {
    /// Applies `step` to the resolved [`ErrorOr`].
    fn map_error_or<U, F>(self, step: F) -> MapErrorOr<Self, F>
    where
        F: FnOnce(ErrorOr<T>) -> ErrorOr<U>;

    /// [`ErrorOr::then_map`] once the future resolves.
    fn then_map<U, F>(self, f: F) -> MapErrorOr<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.map_error_or(move |result| result.then_map(f))
    }

    /// [`ErrorOr::then_do`] once the future resolves.
    fn then_do<F>(self, f: F) -> MapErrorOr<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(&T),
    {
        self.map_error_or(move |result| result.then_do(f))
    }

    /// [`ErrorOr::fail_if`] once the future resolves.
    fn fail_if<P>(
        self,
        predicate: P,
        error: Error,
    ) -> MapErrorOr<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        self.map_error_or(move |result| result.fail_if(predicate, error))
    }

    /// [`ErrorOr::with_error_metadata`] once the future resolves.
    fn with_error_metadata(
        self,
        metadata: Metadata,
    ) -> MapErrorOr<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>> {
        self.map_error_or(move |result| result.with_error_metadata(metadata))
    }

    /// [`ErrorOr::then_async`] once the future resolves.
    fn then_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        async move { self.await.then_async(f).await }
    }
}

impl<Fut, T> ErrorOrFutureExt<T> for Fut
where
    Fut: Future<Output = ErrorOr<T>>,
{
    #[inline]
    fn map_error_or<U, F>(self, step: F) -> MapErrorOr<Self, F>
    where
        F: FnOnce(ErrorOr<T>) -> ErrorOr<U>,
    {
        MapErrorOr::new(self, step)
    }
}
