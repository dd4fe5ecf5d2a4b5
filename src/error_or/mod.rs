//! The [`ErrorOr`] union and its combinators.
//!
//! The combinators are grouped by family:
//!
//! - `then`: chaining over the success branch (`then`, `then_map`, `then_do`)
//! - `fail_if`: turning a success into a failure (`fail_if`, `fail_if_with`)
//! - `switch`: terminal dispatch (`switch`, `switch_first`, `fold`, `fold_first`)
//! - `append`: error aggregation (`append_errors`)
//! - `fallback`: recovery (`or_else`, `recover`, `else_do`)
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! fn parse(input: &str) -> ErrorOr<i32> {
//!     match input.parse::<i32>() {
//!         Ok(value) => ErrorOr::from_value(value),
//!         Err(_) => ErrorOr::from_error(Error::validation("Input.NotANumber", "not a number")),
//!     }
//! }
//!
//! let doubled = parse("21")
//!     .fail_if(|x| *x < 0, Error::validation("Input.Negative", "must be positive"))
//!     .then_map(|x| x * 2);
//! assert_eq!(doubled.into_value(), Some(42));
//!
//! let failed = parse("abc").then_map(|x| x * 2);
//! assert_eq!(failed.first_error().code(), "Input.NotANumber");
//! ```
pub mod append;
pub mod core;
pub mod fail_if;
pub mod fallback;
pub mod iter;
pub mod switch;
pub mod then;

pub use self::core::ErrorOr;
