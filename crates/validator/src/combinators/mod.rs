//! Combinators for composing validators
//!
//! - [`And`]: both validators must pass, first failure wins
//! - [`Each`]: every element of a slice is validated, all failures collected

pub mod and;
pub mod each;

pub use and::And;
pub use each::Each;
