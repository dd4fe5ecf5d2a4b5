pub mod combinators;
pub mod macros;
pub mod types;
