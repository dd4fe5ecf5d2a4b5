//! Async forms of the [`ErrorOr`] combinators.
//!
//! Each method awaits the caller-supplied future exactly once and otherwise
//! behaves like its synchronous counterpart. No tasks are spawned and nothing
//! is polled concurrently. Callbacks that receive `&T` cannot return a future
//! borrowing it; copy what the future needs out of the reference first.

use core::future::Future;

use crate::error_or::ErrorOr;
use crate::types::{Error, Errors, Metadata};

impl<T> ErrorOr<T> {
    /// Async [`ErrorOr::then`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// async fn load(id: u32) -> ErrorOr<String> {
    ///     if id == 0 {
    ///         ErrorOr::from_error(Error::not_found("User.NotFound", "no user 0"))
    ///     } else {
    ///         ErrorOr::from_value(format!("user-{id}"))
    ///     }
    /// }
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let name = ErrorOr::from_value(7).then_async(load).await;
    /// assert_eq!(name.into_value().as_deref(), Some("user-7"));
    /// # });
    /// ```
    pub async fn then_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        match self {
            Self::Value(value) => f(value).await,
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Async [`ErrorOr::then_map`].
    pub async fn then_map_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Value(value) => ErrorOr::Value(f(value).await),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Async [`ErrorOr::then_do`].
    pub async fn then_do_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Value(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async [`ErrorOr::fail_if`]; the predicate is awaited.
    pub async fn fail_if_async<P, Fut>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value).await {
                    Self::from_error(error)
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    /// Async [`ErrorOr::fail_if_with`]; both the predicate and the builder are awaited.
    pub async fn fail_if_with_async<P, PFut, B, BFut>(self, predicate: P, error_builder: B) -> Self
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value).await {
                    Self::from_error(error_builder(&value).await)
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    /// Async [`ErrorOr::switch`].
    pub async fn switch_async<V, VFut, E, EFut>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Errors) -> EFut,
        EFut: Future<Output = ()>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_errors(errors).await,
        }
    }

    /// Async [`ErrorOr::switch_first`].
    pub async fn switch_first_async<V, VFut, E, EFut>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_first_error(errors.into_first()).await,
        }
    }

    /// Async [`ErrorOr::fold`].
    pub async fn fold_async<R, V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Errors) -> EFut,
        EFut: Future<Output = R>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_errors(errors).await,
        }
    }

    /// Async [`ErrorOr::fold_first`].
    pub async fn fold_first_async<R, V, VFut, E, EFut>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_first_error(errors.into_first()).await,
        }
    }

    /// Async [`ErrorOr::or_else`].
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Errors) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => f(errors).await,
        }
    }

    /// Async [`ErrorOr::else_do`].
    pub async fn else_do_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&Errors) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Errors(errors) = &self {
            f(errors).await;
        }
        self
    }

    /// [`ErrorOr::then_async`] that stamps `metadata` onto propagated errors.
    pub async fn then_async_with_metadata<U, F, Fut>(self, f: F, metadata: Metadata) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        self.with_error_metadata(metadata).then_async(f).await
    }

    /// [`ErrorOr::then_map_async`] that stamps `metadata` onto propagated errors.
    pub async fn then_map_async_with_metadata<U, F, Fut>(
        self,
        f: F,
        metadata: Metadata,
    ) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.with_error_metadata(metadata).then_map_async(f).await
    }

    /// [`ErrorOr::then_do_async`] that stamps `metadata` onto propagated errors.
    pub async fn then_do_async_with_metadata<F, Fut>(self, f: F, metadata: Metadata) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.with_error_metadata(metadata).then_do_async(f).await
    }

    /// [`ErrorOr::fail_if_async`] that stamps `metadata` onto propagated errors.
    pub async fn fail_if_async_with_metadata<P, Fut>(
        self,
        predicate: P,
        error: Error,
        metadata: Metadata,
    ) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.with_error_metadata(metadata)
            .fail_if_async(predicate, error)
            .await
    }

    /// [`ErrorOr::fail_if_with_async`] that stamps `metadata` onto propagated errors.
    ///
    /// The error built for a failing predicate is left as built.
    pub async fn fail_if_with_async_with_metadata<P, PFut, B, BFut>(
        self,
        predicate: P,
        error_builder: B,
        metadata: Metadata,
    ) -> Self
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        self.with_error_metadata(metadata)
            .fail_if_with_async(predicate, error_builder)
            .await
    }

    /// [`ErrorOr::switch_async`] after overwriting the metadata of every error.
    pub async fn switch_async_with_metadata<V, VFut, E, EFut>(
        self,
        on_value: V,
        on_errors: E,
        metadata: Metadata,
    ) where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Errors) -> EFut,
        EFut: Future<Output = ()>,
    {
        self.with_error_metadata(metadata)
            .switch_async(on_value, on_errors)
            .await;
    }

    /// [`ErrorOr::switch_first_async`] after overwriting the metadata of every error.
    pub async fn switch_first_async_with_metadata<V, VFut, E, EFut>(
        self,
        on_value: V,
        on_first_error: E,
        metadata: Metadata,
    ) where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        self.with_error_metadata(metadata)
            .switch_first_async(on_value, on_first_error)
            .await;
    }
}
