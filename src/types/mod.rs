//! Error types and utilities.
//!
//! This module provides the leaf data types the rest of the crate is built on:
//! the [`Error`] record, its [`ErrorKind`], attached [`Metadata`], the
//! non-empty [`Errors`] list and the zero-sized marker payloads.
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorKind, Errors, Metadata};
//!
//! let errors = Errors::new(Error::validation("Email.Invalid", "missing '@'"))
//!     .with(Error::of_kind(ErrorKind::Conflict));
//!
//! let tagged = errors.with_metadata(&Metadata::new().with("request_id", "r-17"));
//! assert!(tagged.iter().all(|e| e.metadata().is_some()));
//! assert!(errors.iter().all(|e| e.metadata().is_none()));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod error_kind;
pub mod errors;
pub mod markers;
pub mod metadata;

pub use error::*;
pub use error_kind::*;
pub use errors::*;
pub use markers::*;
pub use metadata::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, which covers the common single-error
/// case without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
