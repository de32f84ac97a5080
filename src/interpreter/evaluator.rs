/// Core evaluation logic.
///
/// Contains the `Evaluator`, the post-order dispatch over expression nodes and
/// the `EvalResult` alias.
pub mod core;

/// Unary sign evaluation.
pub mod unary;

/// Operator application evaluation.
///
/// Evaluates operands left to right and folds them with the operator.
pub mod operation;

/// Binary arithmetic on two values, including the division by zero check.
pub mod scalar;

pub use self::core::{EvalResult, Evaluator, evaluate};
