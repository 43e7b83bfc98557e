//! Adder engine — tokenizing, validation, summation.

use std::num::IntErrorKind;

use log::debug;

use crate::delimiter::{parse_header, Delimiters};
use crate::error::{CalculatorError, Result};

use super::types::Calculation;

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

/// Sum the integers in `input`.
///
/// Empty input sums to 0. Numbers are separated by `,` or `\n`, or by the
/// single character declared in a leading `//X\n` header. Any negative
/// number fails the whole call with [`CalculatorError::NegativeNumbers`].
pub fn add(input: &str) -> Result<i64> {
    let (_, numbers) = tokenize(input)?;
    reject_negatives(&numbers)?;
    checked_sum(&numbers)
}

// ---------------------------------------------------------------------------
// calculate
// ---------------------------------------------------------------------------

/// Like [`add`], but returns the delimiters and numbers alongside the sum.
pub fn calculate(input: &str) -> Result<Calculation> {
    let (delimiters, numbers) = tokenize(input)?;
    reject_negatives(&numbers)?;
    let sum = checked_sum(&numbers)?;

    debug!(
        "summed {} numbers with {} delimiters: {}",
        numbers.len(),
        delimiters,
        sum
    );

    Ok(Calculation {
        input: input.to_string(),
        delimiters,
        numbers,
        sum,
    })
}

// ---------------------------------------------------------------------------
// parse_numbers
// ---------------------------------------------------------------------------

/// Parse `input` into its integers without validating or summing them.
///
/// Negative numbers are returned as-is.
pub fn parse_numbers(input: &str) -> Result<Vec<i64>> {
    tokenize(input).map(|(_, numbers)| numbers)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn tokenize(input: &str) -> Result<(Delimiters, Vec<i64>)> {
    if input.is_empty() {
        return Ok((Delimiters::Default, Vec::new()));
    }

    let (delimiters, body) = parse_header(input);
    if body.is_empty() {
        return Ok((delimiters, Vec::new()));
    }

    let numbers = delimiters
        .split(body)
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect::<Result<Vec<_>>>()?;

    Ok((delimiters, numbers))
}

fn parse_token(token: &str, position: usize) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CalculatorError::Overflow,
        _ => CalculatorError::InvalidNumber {
            token: token.to_string(),
            position,
        },
    })
}

fn reject_negatives(numbers: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();

    if negatives.is_empty() {
        Ok(())
    } else {
        debug!("rejecting {} negative numbers", negatives.len());
        Err(CalculatorError::NegativeNumbers(negatives))
    }
}

fn checked_sum(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or(CalculatorError::Overflow)
}
