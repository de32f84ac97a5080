use tracing::debug;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees and computes their values.
///
/// The evaluator holds no per-program state, so one instance can be created
/// once and reused for every input of an interactive session.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a whole program and returns its value.
    ///
    /// This is the main entry point for evaluation. Evaluation stops at the
    /// first runtime error, without a partial result.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if any division has a zero
    /// right-hand operand.
    ///
    /// # Example
    /// ```
    /// use moose::interpreter::{evaluator::Evaluator, lexer::scan, parser::parse};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// let expr = parse(&scan("(* 2 (+ 1 2) 4)").tokens).unwrap();
    /// assert_eq!(evaluator.evaluate(&expr).unwrap(), 24.0);
    ///
    /// let expr = parse(&scan("(/ 4 0)").tokens).unwrap();
    /// assert!(evaluator.evaluate(&expr).is_err());
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        let result = self.eval(expr);
        match &result {
            Ok(value) => debug!(value, "evaluated program"),
            Err(e) => debug!(error = %e, "evaluation failed"),
        }
        result
    }

    /// Evaluates one node in post-order.
    ///
    /// Literals yield their value, unary signs apply to their operand and
    /// operations fold their operands left to right.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Unary { sign, operand, .. } => self.eval_unary(*sign, operand),
            Expr::Operation { operator,
                              token,
                              operands, } => self.eval_operation(*operator, token, operands),
        }
    }
}

/// Evaluates `expr` with a fresh [`Evaluator`].
///
/// # Errors
/// See [`Evaluator::evaluate`].
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    Evaluator::new().evaluate(expr)
}
