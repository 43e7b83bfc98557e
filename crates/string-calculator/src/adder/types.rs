//! Data structures produced by the adder.

use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiters;

/// Full report of one successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub input: String,
    pub delimiters: Delimiters,
    pub numbers: Vec<i64>,
    pub sum: i64,
}

impl Calculation {
    /// Number of integers that were summed.
    pub fn count(&self) -> usize {
        self.numbers.len()
    }
}
