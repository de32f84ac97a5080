use crate::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::token::Token,
};

/// Exit status for a lexical or parse error (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for a runtime error (`EX_SOFTWARE`).
pub const EXIT_RUNTIME_ERROR: u8 = 70;

/// The pipeline stage an [`Error`] comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while scanning.
    Lex,
    /// Raised while parsing.
    Parse,
    /// Raised while evaluating.
    Runtime,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::Runtime => "RuntimeError",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Any error that aborts one run of the pipeline.
pub enum Error {
    /// The source contained something the scanner could not tokenize.
    Lex(LexError),
    /// The token sequence does not match the grammar.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// The stage the error comes from.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// The token the error points at.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Lex(e) => e.token(),
            Self::Parse(e) => e.token(),
            Self::Runtime(e) => e.token(),
        }
    }

    /// A human-readable description without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lex(e) => e.message(),
            Self::Parse(e) => e.message(),
            Self::Runtime(e) => e.message(),
        }
    }

    /// The process exit status a file run ends with after this error.
    ///
    /// ## Example
    /// ```
    /// use moose::{error::{Error, RuntimeError}, interpreter::token::{Token, TokenKind}};
    ///
    /// let token = Token::new(TokenKind::Slash, "/", 1, 2);
    /// let error = Error::Runtime(RuntimeError::DivisionByZero { token });
    ///
    /// assert_eq!(error.exit_code(), 70);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Lex(_) | Self::Parse(_) => EXIT_DATA_ERROR,
            Self::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
