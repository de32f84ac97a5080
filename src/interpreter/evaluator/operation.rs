use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::Token,
    },
};

impl Evaluator {
    /// Evaluates an operator application.
    ///
    /// All operands are evaluated first, left to right. Their values are then
    /// folded left to right with the operator, so `(- 10 1 2)` computes
    /// `(10 - 1) - 2`.
    ///
    /// # Parameters
    /// - `operator`: The operator.
    /// - `token`: The operator token, for error reporting.
    /// - `operands`: The operand expressions.
    ///
    /// # Returns
    /// The folded value.
    ///
    /// # Errors
    /// - Propagates the first runtime error raised by an operand.
    /// - `DivisionByZero` from the fold.
    /// - `MissingOperands` if the node has no operands at all.
    pub fn eval_operation(&self,
                          operator: Operator,
                          token: &Token,
                          operands: &[Expr])
                          -> EvalResult<f64> {
        let values = operands.iter()
                             .map(|operand| self.eval(operand))
                             .collect::<EvalResult<Vec<_>>>()?;

        let (first, rest) =
            values.split_first()
                  .ok_or_else(|| RuntimeError::MissingOperands { token: token.clone() })?;

        rest.iter().try_fold(*first, |acc, value| {
                       Self::eval_scalar_op(operator, acc, *value, token)
                   })
    }
}
