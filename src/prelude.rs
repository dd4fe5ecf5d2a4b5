//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_or::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errors!`], [`metadata!`]
//! - **Types**: [`ErrorOr`], [`Error`], [`ErrorKind`], [`Errors`], [`Metadata`], marker payloads
//! - **Traits**: [`IntoErrorOr`], [`ToErrorOr`], [`ErrorSource`]
//!
//! # Examples
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn create_user(name: &str) -> ErrorOr<Created> {
//!     name.to_error_or()
//!         .fail_if(|n| n.is_empty(), Error::validation("Name.Empty", "name is required"))
//!         .then_map(|_| Created)
//! }
//!
//! assert!(create_user("ada").is_value());
//! assert!(create_user("").is_error());
//! ```

// Macros
pub use crate::{errors, metadata};

// Core types
pub use crate::error_or::ErrorOr;
pub use crate::types::{
    outcome, Created, Deleted, Error, ErrorKind, Errors, Metadata, MetadataValue, Success, Updated,
};

// Traits
pub use crate::traits::{ErrorSource, IntoErrorOr, ToErrorOr};
