//! A value-or-errors union for explicit, inspectable failure handling.
//!
//! [`ErrorOr<T>`] holds either a produced value or a non-empty, ordered list
//! of structured [`Error`]s. Each submodule re-exports its public surface from
//! here, so consumers can simply depend on `error_or::*` or pick focused pieces
//! as needed.
//!
//! # Examples
//!
//! ## Chaining Fallible Steps
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let a = ErrorOr::from_value(5);
//! assert_eq!(*a.then_map(|x| x + 1).value(), 6);
//!
//! let b = ErrorOr::<i32>::from_error(Error::validation("E1", "bad"));
//! let c = b.then_map(|x| x + 1);
//! assert!(c.is_error());
//! assert_eq!(c.first_error(), &Error::validation("E1", "bad"));
//! ```
//!
//! ## Collecting Errors From Independent Checks
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let name = ErrorOr::<&str>::from_error(Error::validation("Name.Empty", "name is required"));
//! let age = ErrorOr::<u8>::from_error(Error::validation("Age.Range", "age out of range"));
//!
//! let form = ErrorOr::from_value(()).append_errors([name.errors().clone(), age.errors().clone()]);
//! let codes: Vec<_> = form.errors().iter().map(|e| e.code().to_owned()).collect();
//! assert_eq!(codes, ["Name.Empty", "Age.Range"]);
//! ```
//!
//! ## Consuming At The Edge
//!
//! ```
//! use error_or::{Error, ErrorKind, ErrorOr};
//!
//! let status = ErrorOr::<u32>::from_error(Error::not_found("User.NotFound", "no such user"))
//!     .fold_first(
//!         |_| 200,
//!         |error| match error.kind() {
//!             ErrorKind::NotFound => 404,
//!             ErrorKind::Validation => 400,
//!             _ => 500,
//!         },
//!     );
//! assert_eq!(status, 404);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Option`, and `ErrorOr`
pub mod convert;
/// The `ErrorOr` union and its combinator families
pub mod error_or;
/// Macros for building error lists and metadata
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and aggregation traits
pub mod traits;
/// Error, error kind, metadata and marker types
pub mod types;

/// Async combinators and future extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use error_or::ErrorOr;
pub use traits::*;
pub use types::{
    outcome, Created, Deleted, EmptyErrors, Error, ErrorKind, ErrorVec, Errors, Metadata,
    MetadataValue, Success, Updated,
};
