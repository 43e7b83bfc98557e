//! String Calculator — sums delimited strings of integers.
//!
//! Numbers are separated by `,` or `\n`, or by a single custom character
//! declared in a leading `//X\n` header. Negative numbers are rejected with
//! an error listing every offending value in order.
//!
//! ```
//! assert_eq!(string_calculator::add("1\n2,3").unwrap(), 6);
//! assert_eq!(string_calculator::add("//;\n1;2").unwrap(), 3);
//!
//! let err = string_calculator::add("1,-2,3,-4").unwrap_err();
//! assert_eq!(err.to_string(), "negative numbers not allowed: -2,-4");
//! ```

pub mod adder;
pub mod delimiter;
pub mod error;

// Re-export primary types
pub use adder::{add, calculate, parse_numbers, Calculation};
pub use delimiter::{parse_header, Delimiters, DEFAULT_DELIMITERS};
pub use error::{CalculatorError, Result};
