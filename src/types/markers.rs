//! Zero-sized success payloads for operations that return no data.
//!
//! ```
//! use error_or::{outcome, Deleted, ErrorOr};
//!
//! fn delete_user(id: u64) -> ErrorOr<Deleted> {
//!     let _ = id;
//!     ErrorOr::from_value(outcome::deleted())
//! }
//!
//! assert_eq!(delete_user(7).into_value(), Some(Deleted));
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic "it worked".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Success;

/// A resource was created.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Created;

/// A resource was deleted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Deleted;

/// A resource was updated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Updated;

/// Constructor functions for the marker types.
pub mod outcome {
    use super::{Created, Deleted, Success, Updated};

    #[inline]
    pub const fn success() -> Success {
        Success
    }

    #[inline]
    pub const fn created() -> Created {
        Created
    }

    #[inline]
    pub const fn deleted() -> Deleted {
        Deleted
    }

    #[inline]
    pub const fn updated() -> Updated {
        Updated
    }
}
