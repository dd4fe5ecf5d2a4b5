//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use error_or::prelude_async::*;
//!
//! async fn load_profile(id: u64) -> ErrorOr<Profile> {
//!     fetch_user(id)
//!         .then_map(Profile::from)
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`errors!`], [`metadata!`]
//! - **Types**: [`ErrorOr`], [`Error`], [`ErrorKind`], [`Errors`], [`Metadata`]
//! - **Traits**: [`IntoErrorOr`], [`ToErrorOr`], [`ErrorSource`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`ErrorOrFutureExt`](crate::async_ext::ErrorOrFutureExt)
//! - **Types**: [`MapErrorOr`](crate::async_ext::MapErrorOr)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{ErrorOrFutureExt, MapErrorOr};
