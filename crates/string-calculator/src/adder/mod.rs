//! Adder — sums a delimited string of integers.
//!
//! The adder module provides:
//! - Header detection and delimiter selection (via [`crate::delimiter`])
//! - Tokenizing and integer parsing
//! - Negative number rejection with an ordered violation list
//! - Checked summation and a serializable [`Calculation`] report

pub mod engine;
pub mod types;

pub use types::Calculation;

pub use engine::{add, calculate, parse_numbers};
