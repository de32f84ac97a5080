use crate::interpreter::token::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Operands are numeric by construction of the syntax tree, so the only
/// failure left at runtime is arithmetic, plus a guard against hand-built
/// trees that skipped the parser.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The `/` operator token of the failing application.
        token: Token,
    },
    /// An operator application without any operand to fold.
    MissingOperands {
        /// The operator token of the application.
        token: Token,
    },
}

impl RuntimeError {
    /// The token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::DivisionByZero { token } | Self::MissingOperands { token } => token,
        }
    }

    /// A human-readable description without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::DivisionByZero { .. } => "cannot divide by 0".to_string(),
            Self::MissingOperands { token } => {
                format!("operator '{}' has no operands", token.lexeme)
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token();
        write!(f,
               "Error on line {}, column {}: {}.",
               token.line,
               token.column,
               self.message())
    }
}

impl std::error::Error for RuntimeError {}
