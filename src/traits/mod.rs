//! Core traits for lifting into and aggregating [`ErrorOr`](crate::ErrorOr).
//!
//! - [`IntoErrorOr`]: Conversion of errors and `Result`s into the union
//! - [`ToErrorOr`]: Wrapping any value as a success
//! - [`ErrorSource`]: Uniform access to the errors a value carries, used by aggregation
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{ErrorSource, IntoErrorOr};
//! use error_or::{Error, ErrorOr};
//!
//! let failed: ErrorOr<()> = Error::forbidden("Doc.Locked", "document is locked").into_error_or();
//! assert_eq!(ErrorSource::errors_or_empty(&failed).len(), 1);
//! ```

pub mod error_source;
pub mod into_error_or;

pub use error_source::ErrorSource;
pub use into_error_or::{IntoErrorOr, ToErrorOr};
