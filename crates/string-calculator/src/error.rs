//! Error types for the string calculator.
//!
//! Every failure is returned as a value; no input can make the library panic.

/// Calculator error types covering all operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("negative numbers not allowed: {}", join_numbers(.0))]
    NegativeNumbers(Vec<i64>),

    #[error("invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("value overflows a 64-bit integer")]
    Overflow,
}

impl CalculatorError {
    /// The rejected negative values, in the order they appeared.
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            Self::NegativeNumbers(values) => Some(values),
            _ => None,
        }
    }
}

fn join_numbers(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CalculatorError>;
