//! Property-based tests for the pipeline.
//!
//! Random well-formed programs are generated as source text and checked for:
//! 1. Round-trip: printing the parsed tree yields source that parses to a tree
//!    with the same value and the same printed form.
//! 2. Determinism: scanning the same input twice gives the same result.
//! 3. Robustness: arbitrary input always scans to a sequence terminated by a
//!    single end token, with every token on a quotable line.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use moose::{
    ast::Expr,
    interpreter::{evaluator::evaluate, lexer::scan, parser::parse},
};
use proptest::prelude::*;

// -- Code Generation Strategies --

/// Generate a numeric literal, with or without a fractional part.
fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![(0u32..10_000).prop_map(|n| n.to_string()),
                (0u32..1000, 0u32..1000).prop_map(|(i, f)| format!("{i}.{f}")),]
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]
}

fn sign_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-")]
}

/// Whitespace and comments that may separate tokens.
fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("  "), Just("\n"), Just("\t"), Just(" /* c */ ")]
}

/// Generate a syntactically valid program.
fn program_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![number_strategy(),
                           (sign_strategy(), number_strategy()).prop_map(|(s, n)| format!("{s}{n}")),];

    leaf.prop_recursive(4, 48, 5, |inner| {
            let operation = (operator_strategy(),
                             prop::collection::vec((separator_strategy(), inner), 2..5))
                .prop_map(|(op, operands)| {
                    let body: String = operands.into_iter()
                                               .map(|(sep, operand)| format!("{sep}{operand}"))
                                               .collect();
                    format!("({op}{body})")
                })
                .boxed();

            prop_oneof![operation.clone(),
                        (sign_strategy(), operation).prop_map(|(s, o)| format!("{s}{o}")),]
        })
}

fn parse_source(source: &str) -> Expr {
    parse(&scan(source).tokens).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"))
}

/// Compares evaluation results, treating two NaNs as equal.
fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn generated_programs_parse(source in program_strategy()) {
        let scan = scan(&source);
        prop_assert!(scan.issues.is_empty());
        prop_assert!(parse(&scan.tokens).is_ok());
    }

    #[test]
    fn printed_tree_round_trips(source in program_strategy()) {
        let expr = parse_source(&source);
        let printed = expr.to_string();
        let reparsed = parse_source(&printed);

        prop_assert_eq!(reparsed.to_string(), printed);

        match (evaluate(&expr), evaluate(&reparsed)) {
            (Ok(a), Ok(b)) => prop_assert!(same_value(a, b), "{} vs {}", a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.message(), b.message()),
            (a, b) => prop_assert!(false, "results differ: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn scanning_is_deterministic(source in ".{0,64}") {
        prop_assert_eq!(scan(&source), scan(&source));
    }

    #[test]
    fn arbitrary_input_scans_to_one_end_token(source in "[ -~\t\n]{0,64}") {
        let scan = scan(&source);
        let ends = scan.tokens.iter().filter(|t| t.is_end_of_input()).count();

        prop_assert_eq!(ends, 1);
        prop_assert!(scan.tokens.last().is_some_and(|t| t.is_end_of_input()));
        for token in &scan.tokens {
            prop_assert!(scan.lines.line(&source, token.line).is_some());
        }
    }
}
