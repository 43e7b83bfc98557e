//! Integration test: the public library API end to end.
//!
//! Covers:
//! 1. The documented examples for `add`
//! 2. Custom delimiter headers through `parse_header` and `calculate`
//! 3. Negative number rejection and its message
//! 4. JSON shape of a `Calculation`

use string_calculator::{
    add, calculate, parse_header, parse_numbers, CalculatorError, Delimiters, DEFAULT_DELIMITERS,
};

#[test]
fn documented_examples() {
    assert_eq!(add("").unwrap(), 0);
    assert_eq!(add("1").unwrap(), 1);
    assert_eq!(add("1,2").unwrap(), 3);
    assert_eq!(add("1\n2,3").unwrap(), 6);
    assert_eq!(add("//;\n1;2").unwrap(), 3);
}

#[test]
fn negative_numbers_rejected() {
    let err = add("1,-2,3,-4").expect_err("negatives must fail");
    assert_eq!(err.to_string(), "negative numbers not allowed: -2,-4");
    assert_eq!(err, CalculatorError::NegativeNumbers(vec![-2, -4]));
}

#[test]
fn header_then_calculation() {
    // ── Step 1: detect the header ───────────────────────────────────────
    let (delimiters, body) = parse_header("//#\n7#8#9");
    assert_eq!(delimiters, Delimiters::Custom('#'));
    assert_eq!(body, "7#8#9");

    // ── Step 2: numbers come back in order ──────────────────────────────
    assert_eq!(parse_numbers("//#\n7#8#9").unwrap(), vec![7, 8, 9]);

    // ── Step 3: full report ─────────────────────────────────────────────
    let calc = calculate("//#\n7#8#9").expect("calculation should succeed");
    assert_eq!(calc.sum, 24);
    assert_eq!(calc.delimiters, delimiters);
}

#[test]
fn default_delimiters_constant() {
    assert_eq!(DEFAULT_DELIMITERS, [',', '\n']);
    for c in DEFAULT_DELIMITERS {
        assert!(Delimiters::Default.contains(c));
    }
}

#[test]
fn calculation_serializes_to_json() {
    let calc = calculate("//;\n1;2").unwrap();
    let json = serde_json::to_value(&calc).expect("serialize");

    assert_eq!(json["input"], "//;\n1;2");
    assert_eq!(json["delimiters"]["custom"], ";");
    assert_eq!(json["numbers"], serde_json::json!([1, 2]));
    assert_eq!(json["sum"], 3);

    let default = serde_json::to_value(calculate("1,2").unwrap()).unwrap();
    assert_eq!(default["delimiters"], "default");
}

#[test]
fn calculation_round_trips_through_json() {
    let calc = calculate("4\n5,6").unwrap();
    let text = serde_json::to_string(&calc).unwrap();
    let back: string_calculator::Calculation = serde_json::from_str(&text).unwrap();
    assert_eq!(back, calc);
}
