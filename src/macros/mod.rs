//! Ergonomic macros for building error lists and metadata.
//!
//! - [`macro@crate::errors`] - Builds a non-empty [`Errors`](crate::types::Errors) list.
//!   The grammar requires at least one element, so an empty list does not compile.
//! - [`macro@crate::metadata`] - Builds a [`Metadata`](crate::types::Metadata) map from
//!   `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_or::{errors, metadata, Error, ErrorOr};
//!
//! let failed: ErrorOr<()> = ErrorOr::Errors(errors![
//!     Error::validation("Name.Empty", "name is required"),
//!     Error::validation("Email.Invalid", "missing '@'"),
//! ]);
//!
//! let tagged = failed.with_error_metadata(metadata! {
//!     "form" => "signup",
//!     "attempt" => 2,
//! });
//!
//! assert_eq!(tagged.errors().len(), 2);
//! assert!(tagged.errors().iter().all(|e| e.metadata().is_some()));
//! ```

/// Builds an [`Errors`](crate::types::Errors) list from one or more errors.
///
/// # Examples
///
/// ```
/// use error_or::{errors, Error};
///
/// let list = errors![Error::failure("A", "a"), Error::failure("B", "b")];
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.first().code(), "A");
/// ```
///
/// ```compile_fail
/// let list = error_or::errors![];
/// ```
#[macro_export]
macro_rules! errors {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::types::Errors::new($first)$(.with($rest))*
    };
}

/// Builds a [`Metadata`](crate::types::Metadata) map.
///
/// Keys accept anything convertible into `String`, values anything convertible
/// into [`MetadataValue`](crate::types::MetadataValue).
///
/// # Examples
///
/// ```
/// use error_or::{metadata, MetadataValue};
///
/// let meta = metadata! { "user_id" => 42, "admin" => false };
/// assert_eq!(meta.get("admin"), Some(&MetadataValue::Bool(false)));
///
/// let empty = metadata! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::types::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::types::Metadata::new()$(.with($key, $value))+
    };
}
