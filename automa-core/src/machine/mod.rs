//! DFA model and invariant validation

pub mod dfa;
pub mod validate;

pub use dfa::{Dfa, Transition};
pub use validate::{validate, ValidationError, Violation};
