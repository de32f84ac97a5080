use crate::interpreter::{parser::MAX_NESTING_DEPTH, token::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Every variant carries the offending token, so the error can be rendered
/// with the source line and a caret under its column. The first parse error
/// abandons the whole parse.
pub enum ParseError {
    /// Found a token that cannot start an expression.
    ExpectedExpression {
        /// The token encountered.
        token: Token,
    },
    /// The token after `(` is not one of `+`, `-`, `*`, `/`.
    ExpectedOperator {
        /// The token encountered.
        token: Token,
    },
    /// A unary sign is not followed by a number or `(`.
    ExpectedOperand {
        /// The token encountered.
        token: Token,
    },
    /// An operator application was closed after fewer than two operands.
    TooFewOperands {
        /// The closing token.
        token: Token,
    },
    /// Reached the end of input where `)` was expected.
    MissingClosingParen {
        /// The end of input token.
        token: Token,
    },
    /// A closing parenthesis `)` was expected but something else was found.
    ExpectedClosingParen {
        /// The token encountered.
        token: Token,
    },
    /// Operator applications are nested deeper than the parser allows.
    NestingTooDeep {
        /// The `(` that opens one level too many.
        token: Token,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: Token,
    },
}

impl ParseError {
    /// The token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::ExpectedExpression { token }
            | Self::ExpectedOperator { token }
            | Self::ExpectedOperand { token }
            | Self::TooFewOperands { token }
            | Self::MissingClosingParen { token }
            | Self::ExpectedClosingParen { token }
            | Self::NestingTooDeep { token }
            | Self::UnexpectedTrailingTokens { token } => token,
        }
    }

    /// A human-readable expectation message without position information.
    ///
    /// ## Example
    /// ```
    /// use moose::{error::ParseError, interpreter::token::Token};
    ///
    /// let error = ParseError::MissingClosingParen { token: Token::end_of_input(1, 7) };
    /// assert_eq!(error.message(), "missing ')' after expression");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ExpectedExpression { token } => format!("expected an expression starting with '(', '+', '-' or a number but got {}",
                                                          token.describe()),
            Self::ExpectedOperator { token } => format!("expected an operator '+', '-', '*' or '/' but got {}",
                                                        token.describe()),
            Self::ExpectedOperand { token } => format!("expected a number or '(' after the unary sign but got {}",
                                                       token.describe()),
            Self::TooFewOperands { .. } => {
                "expected at least two operands before ')'".to_string()
            },
            Self::MissingClosingParen { .. } => "missing ')' after expression".to_string(),
            Self::ExpectedClosingParen { token } => {
                format!("expected ')' but got {}", token.describe())
            },
            Self::NestingTooDeep { .. } => {
                format!("expressions nested deeper than {MAX_NESTING_DEPTH} levels")
            },
            Self::UnexpectedTrailingTokens { token } => {
                format!("expected end of input but got {}", token.describe())
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token();
        write!(f,
               "Error on line {}, column {}: {}.",
               token.line,
               token.column,
               self.message())
    }
}

impl std::error::Error for ParseError {}
