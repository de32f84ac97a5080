use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::Token,
    },
};

impl Evaluator {
    /// Evaluates one binary step of a fold.
    ///
    /// Division checks its right operand explicitly: a zero (of either sign)
    /// is an error rather than an infinity.
    ///
    /// # Parameters
    /// - `operator`: The arithmetic operator.
    /// - `left`: The running result.
    /// - `right`: The next operand.
    /// - `token`: The operator token, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use moose::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::Evaluator, token::{Token, TokenKind}},
    /// };
    ///
    /// let token = Token::new(TokenKind::Slash, "/", 1, 2);
    ///
    /// let result = Evaluator::eval_scalar_op(Operator::Divide, 7.0, 2.0, &token).unwrap();
    /// assert_eq!(result, 3.5);
    ///
    /// assert!(Evaluator::eval_scalar_op(Operator::Divide, 7.0, 0.0, &token).is_err());
    /// ```
    pub fn eval_scalar_op(operator: Operator,
                          left: f64,
                          right: f64,
                          token: &Token)
                          -> EvalResult<f64> {
        Ok(match operator {
               Operator::Add => left + right,
               Operator::Subtract => left - right,
               Operator::Multiply => left * right,
               Operator::Divide => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { token: token.clone() });
                   }
                   left / right
               },
           })
    }
}
