//! Async extensions for error-or.
//!
//! This module adds async forms of the [`ErrorOr`](crate::ErrorOr)
//! combinators (`then_async`, `fail_if_async`, `switch_async`, ...) and an
//! extension trait for futures that resolve to an `ErrorOr`.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_or::prelude_async::*;
//!
//! async fn register(email: String) -> ErrorOr<Created> {
//!     validate_email(email)
//!         .then_async(|email| store_user(email))
//!         .await
//! }
//! ```

mod combinators;
mod future_ext;
mod map_future;

pub use future_ext::ErrorOrFutureExt;
pub use map_future::MapErrorOr;
