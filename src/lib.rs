//! # moose
//!
//! moose is an interpreter for a prefix-notation ("Polish") arithmetic
//! expression language written in Rust. A program is a single expression such
//! as `(+ 1 (* 2 3) 4)`, built from the four arithmetic operators, numeric
//! literals, unary signs and comments.
//!
//! Every input goes through three stages: the scanner turns source text into
//! tokens, the parser builds an expression tree, and the evaluator folds the
//! tree into a number. A failure at any stage aborts that input with a
//! diagnostic that points at the offending token.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, RenderMode, render},
    interpreter::{
        evaluator::Evaluator,
        lexer::{Scan, scan},
        line_index::SourceLineIndex,
        parser::parse,
        token::Token,
    },
    util::num::format_number,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator and sign types that
/// represent one program as a tree. The AST is built by the parser, walked by
/// the evaluator, and printed back to canonical source by its `Display`
/// implementation.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines every error the pipeline can raise, the unified
/// `Error` the driver handles, and the rendering of errors as diagnostics with
/// the offending source line and a caret.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the offending token for line and column information.
/// - Maps errors onto process exit codes.
pub mod error;
/// Orchestrates the stages of code execution.
///
/// This module ties together the token model, the lexer, the parser and the
/// evaluator.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General utilities, such as number formatting.
pub mod util;

/// A successful run: the parsed program and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The parsed expression tree.
    pub expr:  Expr,
    /// The computed value.
    pub value: f64,
}

impl Outcome {
    /// The value as printed: integer-valued results without a trailing `.0`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_number(self.value)
    }
}

/// The result of running the pipeline over one input.
///
/// Besides the result, a run keeps the line index of its source so a failure
/// can be rendered with the offending line.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Spans of the source lines.
    pub lines:  SourceLineIndex,
    /// The outcome, or the error that aborted the run.
    pub result: Result<Outcome, Error>,
}

impl Run {
    /// The process exit status for this run: 0 on success, 65 for lexical and
    /// parse errors, 70 for runtime errors.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match &self.result {
            Ok(_) => 0,
            Err(e) => e.exit_code(),
        }
    }

    /// Renders the error of a failed run as a diagnostic, or `None` if the run
    /// succeeded.
    #[must_use]
    pub fn render_error(&self, source: &str, mode: RenderMode<'_>) -> Option<String> {
        self.result
            .as_ref()
            .err()
            .map(|error| render(error, source, &self.lines, mode))
    }
}

/// Runs `source` through the scanner, the parser and `evaluator`.
///
/// The first lexical issue, if any, aborts the run before parsing. Otherwise
/// the tokens are parsed and the tree is evaluated.
///
/// # Example
/// ```
/// use moose::{interpret_with, interpreter::evaluator::Evaluator};
///
/// let evaluator = Evaluator::new();
///
/// let run = interpret_with(&evaluator, "(/ 7 2)");
/// assert_eq!(run.result.unwrap().formatted(), "3.5");
///
/// let run = interpret_with(&evaluator, "(/ 4 0)");
/// assert_eq!(run.exit_code(), 70);
/// ```
#[must_use]
pub fn interpret_with(evaluator: &Evaluator, source: &str) -> Run {
    let Scan { tokens,
               lines,
               issues, } = scan(source);

    let result = match issues.into_iter().next() {
        Some(issue) => Err(Error::from(issue)),
        None => evaluate_tokens(evaluator, &tokens),
    };

    Run { lines, result }
}

/// Runs `source` with a fresh evaluator. See [`interpret_with`].
#[must_use]
pub fn interpret_source(source: &str) -> Run {
    interpret_with(&Evaluator::new(), source)
}

/// Returns the outcome of running `source`, discarding the line index.
///
/// # Errors
/// Returns the lexical, parse or runtime error that aborted the run.
///
/// # Examples
/// ```
/// use moose::interpret;
///
/// // Operands fold left to right.
/// let outcome = interpret("(- 10 1 2)").unwrap();
/// assert_eq!(outcome.value, 7.0);
/// assert_eq!(outcome.formatted(), "7");
///
/// // An operator needs at least two operands.
/// assert!(interpret("(+ 1)").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Outcome, Error> {
    interpret_source(source).result
}

/// Parses and evaluates an already scanned token sequence.
fn evaluate_tokens(evaluator: &Evaluator, tokens: &[Token]) -> Result<Outcome, Error> {
    let expr = parse(tokens)?;
    let value = evaluator.evaluate(&expr)?;
    Ok(Outcome { expr, value })
}
