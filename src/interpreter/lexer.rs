use logos::{Filter, Lexer, Logos};
use tracing::{debug, trace};

use crate::{
    error::LexError,
    interpreter::{
        line_index::SourceLineIndex,
        token::{Token, TokenKind},
    },
};

/// The raw lexical grammar recognized by the scanner.
///
/// Comments and whitespace are consumed here and never reach the token
/// sequence. Anything logos cannot match surfaces as an error and becomes a
/// [`TokenKind::Unrecognized`] token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Numeric literals, such as `3.14` or `42`. A trailing dot is not part
    /// of the number.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// /* Block comments. */
    /// ```
    /// Only emitted when the closing `*/` is missing.
    #[token("/*", block_comment)]
    UnterminatedComment,
    /// Line breaks close the current line of the line index.
    #[token("\n", |lex| {
        let offset = lex.span().start;
        lex.extras.new_line(offset);
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl RawToken {
    /// Maps a raw token onto the kind it is reported as, or `None` for tokens
    /// that are always skipped.
    const fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::Number(_) => Some(TokenKind::Number),
            Self::LParen => Some(TokenKind::LParen),
            Self::RParen => Some(TokenKind::RParen),
            Self::Plus => Some(TokenKind::Plus),
            Self::Minus => Some(TokenKind::Minus),
            Self::Star => Some(TokenKind::Star),
            Self::Slash => Some(TokenKind::Slash),
            Self::UnterminatedComment => Some(TokenKind::Unrecognized),
            Self::Comment | Self::NewLine | Self::Ignored => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line, where it starts, and the line index built so far.
struct LexerExtras {
    /// The current line number in the source being tokenized.
    line:       usize,
    /// Byte offset where the current line begins.
    line_start: usize,
    /// Spans of every completed line.
    lines:      SourceLineIndex,
    /// Start position of a comment that swallowed line breaks.
    pending:    Option<(usize, usize)>,
}

impl LexerExtras {
    const fn new() -> Self {
        Self { line:       1,
               line_start: 0,
               lines:      SourceLineIndex::new(),
               pending:    None, }
    }

    /// Closes the current line at the newline found at `offset`.
    fn new_line(&mut self, offset: usize) {
        self.lines.push(self.line_start, offset);
        self.line += 1;
        self.line_start = offset + 1;
    }

    /// Returns the 1-based `(line, column)` of the byte `offset`, which must
    /// lie on the current line.
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let column = source.get(self.line_start..offset)
                           .map_or(0, |prefix| prefix.chars().count());
        (self.line, column + 1)
    }

    /// Like [`Self::position`], but prefers a position recorded by a callback
    /// that moved past line breaks.
    fn token_position(&mut self, source: &str, offset: usize) -> (usize, usize) {
        self.pending
            .take()
            .unwrap_or_else(|| self.position(source, offset))
    }
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of scanning one source string.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// Every token in source order, terminated by exactly one
    /// [`TokenKind::EndOfInput`].
    pub tokens: Vec<Token>,
    /// Spans of the physical source lines, for quoting lines in diagnostics.
    pub lines:  SourceLineIndex,
    /// Lexical problems found along the way, in source order. Each one also
    /// left an [`TokenKind::Unrecognized`] token in `tokens`.
    pub issues: Vec<LexError>,
}

/// Converts `source` into its token sequence and line index.
///
/// Scanning never fails outright. Characters outside the language produce
/// [`TokenKind::Unrecognized`] tokens plus an entry in [`Scan::issues`], and
/// scanning carries on so one pass reports everything.
///
/// # Example
/// ```
/// use moose::interpreter::{lexer::scan, token::TokenKind};
///
/// let scan = scan("(+ 2 3.5) // sum");
/// let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::LParen,
///             TokenKind::Plus,
///             TokenKind::Number,
///             TokenKind::Number,
///             TokenKind::RParen,
///             TokenKind::EndOfInput]);
/// assert_eq!(scan.tokens[3].literal, Some(3.5));
/// assert!(scan.issues.is_empty());
/// ```
#[must_use]
pub fn scan(source: &str) -> Scan {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::new());
    let mut tokens = Vec::new();
    let mut issues = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let (line, column) = lexer.extras.token_position(source, span.start);

        let token = match result {
            Ok(RawToken::Number(value)) => Token::number(lexeme, value, line, column),
            Ok(RawToken::UnterminatedComment) => {
                let token = Token::new(TokenKind::Unrecognized, lexeme, line, column);
                issues.push(LexError::UnterminatedComment { token: token.clone() });
                token
            },
            Ok(raw) => match raw.kind() {
                Some(kind) => Token::new(kind, lexeme, line, column),
                None => continue,
            },
            Err(()) => {
                let token = Token::new(TokenKind::Unrecognized, lexeme, line, column);
                if lexeme.starts_with(|c: char| c.is_ascii_digit()) {
                    issues.push(LexError::NumberOutOfRange { token: token.clone() });
                } else {
                    issues.push(LexError::UnrecognizedCharacter { token: token.clone() });
                }
                token
            },
        };

        trace!(kind = ?token.kind, lexeme = %token.lexeme, line, column, "scanned token");
        tokens.push(token);
    }

    let end = source.len();
    let (line, column) = lexer.extras.position(source, end);
    let line_start = lexer.extras.line_start;
    lexer.extras.lines.push(line_start, end);
    tokens.push(Token::end_of_input(line, column));

    let lines = std::mem::take(&mut lexer.extras.lines);
    debug!(tokens = tokens.len(), lines = lines.len(), issues = issues.len(), "scan finished");

    Scan { tokens,
           lines,
           issues }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float or overflows to infinity, which
///   turns the slice into an unrecognized token.
fn parse_number(lex: &Lexer<RawToken>) -> Option<f64> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
}

/// Consumes a block comment whose opening `/*` was just matched.
///
/// Line breaks inside the comment are recorded so later positions stay
/// accurate. A comment without its closing `*/` runs to the end of input and
/// is emitted so it can be reported.
fn block_comment(lex: &mut Lexer<RawToken>) -> Filter<()> {
    let opening = lex.span().start;
    let body_start = lex.span().end;
    let remainder = lex.remainder();

    let (length, terminated) = match remainder.find("*/") {
        Some(index) => (index + 2, true),
        None => (remainder.len(), false),
    };

    let start = lex.extras.position(lex.source(), opening);
    for (index, _) in remainder[..length].match_indices('\n') {
        lex.extras.new_line(body_start + index);
    }
    lex.bump(length);

    if terminated {
        Filter::Skip
    } else {
        lex.extras.pending = Some(start);
        Filter::Emit(())
    }
}
