use crate::{
    ast::{Expr, Sign},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates a unary sign applied to `operand`.
    ///
    /// `Minus` negates the operand's value, `Plus` passes it through.
    ///
    /// # Parameters
    /// - `sign`: The sign.
    /// - `operand`: The signed expression.
    ///
    /// # Returns
    /// The signed value, or the operand's runtime error.
    pub fn eval_unary(&self, sign: Sign, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(Self::apply_sign(sign, value))
    }

    /// Applies `sign` to a value.
    ///
    /// # Example
    /// ```
    /// use moose::{ast::Sign, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::apply_sign(Sign::Minus, 5.0), -5.0);
    /// assert_eq!(Evaluator::apply_sign(Sign::Plus, 5.0), 5.0);
    /// ```
    #[must_use]
    pub fn apply_sign(sign: Sign, value: f64) -> f64 {
        match sign {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}
