/// The kind of a lexical token.
///
/// Every token sequence produced by the scanner ends with exactly one
/// [`TokenKind::EndOfInput`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number,
    /// A character (or unterminated comment) the scanner could not make sense
    /// of.
    Unrecognized,
    /// Marks the position immediately past the last scanned character.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Number => "number",
            Self::Unrecognized => "unrecognized input",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A single lexical unit scanned from source text.
///
/// Tokens are created once per scan and never mutated afterwards. Positions
/// are 1-based and count characters, so a caret printed `column - 1`
/// characters into the echoed source line sits under the token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source text the token was scanned from. Empty for
    /// [`TokenKind::EndOfInput`].
    pub lexeme:  String,
    /// The parsed value of a [`TokenKind::Number`] token.
    pub literal: Option<f64>,
    /// The source line of the first character.
    pub line:    usize,
    /// The source column of the first character.
    pub column:  usize,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line,
               column }
    }

    /// Creates a [`TokenKind::Number`] token carrying its parsed value.
    ///
    /// ## Example
    /// ```
    /// use moose::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::number("2.5", 2.5, 1, 4);
    ///
    /// assert_eq!(token.kind, TokenKind::Number);
    /// assert_eq!(token.literal, Some(2.5));
    /// ```
    #[must_use]
    pub fn number(lexeme: impl Into<String>, value: f64, line: usize, column: usize) -> Self {
        Self { kind: TokenKind::Number,
               lexeme: lexeme.into(),
               literal: Some(value),
               line,
               column }
    }

    /// Creates the terminating [`TokenKind::EndOfInput`] token.
    #[must_use]
    pub fn end_of_input(line: usize, column: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", line, column)
    }

    /// Returns `true` for the terminating token.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Describes the token for error messages: its lexeme, or `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.lexeme.is_empty() {
            self.kind.to_string()
        } else {
            format!("'{}'", self.lexeme)
        }
    }
}
