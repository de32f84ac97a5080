use crate::interpreter::token::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents the lexical problems the scanner records while tokenizing.
///
/// Lexical errors never abort a scan. Each one leaves an unrecognized token in
/// the token sequence and is collected so the driver can report it.
pub enum LexError {
    /// A character that does not belong to the language.
    UnrecognizedCharacter {
        /// The unrecognized token.
        token: Token,
    },
    /// A numeric literal too large to be represented.
    NumberOutOfRange {
        /// The literal token.
        token: Token,
    },
    /// A `/*` comment without a closing `*/`.
    UnterminatedComment {
        /// The token covering the comment through end of input.
        token: Token,
    },
}

impl LexError {
    /// The token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::UnrecognizedCharacter { token }
            | Self::NumberOutOfRange { token }
            | Self::UnterminatedComment { token } => token,
        }
    }

    /// A human-readable description without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnrecognizedCharacter { token } => {
                format!("unexpected character '{}'", token.lexeme)
            },
            Self::NumberOutOfRange { token } => {
                format!("number literal '{}' is out of range", token.lexeme)
            },
            Self::UnterminatedComment { .. } => "unterminated block comment".to_string(),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token();
        write!(f,
               "Error on line {}, column {}: {}.",
               token.line,
               token.column,
               self.message())
    }
}

impl std::error::Error for LexError {}
