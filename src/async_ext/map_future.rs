//! Future wrapper that applies a synchronous step to an [`ErrorOr`] output.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::error_or::ErrorOr;

pin_project! {
    /// A Future that transforms the [`ErrorOr`] produced by an inner future.
    ///
    /// The step runs once, right after the inner future resolves. Nothing is
    /// evaluated while the inner future is pending.
    ///
    /// # Cancel Safety
    ///
    /// `MapErrorOr` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// async fn example() -> ErrorOr<i32> {
    ///     async { ErrorOr::from_value(20) }
    ///         .map_error_or(|r| r.then_map(|x| x + 1))
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct MapErrorOr<Fut, F> {
        #[pin]
        future: Fut,
        step: Option<F>,
    }
}

impl<Fut, F> MapErrorOr<Fut, F> {
    /// Creates a new `MapErrorOr` around `future`.
    #[inline]
    pub fn new(future: Fut, step: F) -> Self {
        Self { future, step: Some(step) }
    }
}

impl<Fut, F, T, U> Future for MapErrorOr<Fut, F>
where
    Fut: Future<Output = ErrorOr<T>>,
    F: FnOnce(ErrorOr<T>) -> ErrorOr<U>,
{
    type Output = ErrorOr<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|output| {
            let step = this
                .step
                .take()
                .expect("MapErrorOr polled after completion; this is a bug");
            step(output)
        })
    }
}

impl<Fut, F, T, U> FusedFuture for MapErrorOr<Fut, F>
where
    Fut: FusedFuture<Output = ErrorOr<T>>,
    F: FnOnce(ErrorOr<T>) -> ErrorOr<U>,
{
    fn is_terminated(&self) -> bool {
        self.step.is_none() || self.future.is_terminated()
    }
}
