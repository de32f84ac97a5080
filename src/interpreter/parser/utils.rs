use std::{borrow::Cow, iter::Peekable};

use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Stands in for the current token once a stream has run dry. Streams passed
/// through [`with_end_of_input`] end in their own end token, which is never
/// consumed, so parsing does not reach this.
static EXHAUSTED: Token = Token { kind:    TokenKind::EndOfInput,
                                  lexeme:  String::new(),
                                  literal: None,
                                  line:    0,
                                  column:  0, };

/// Returns the current token without consuming it.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().unwrap_or(&EXHAUSTED)
}

/// Consumes the current token if it is of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The expected token kind.
/// - `error`: Builds the error from the offending token otherwise.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns the error built by `error` if the current token is of another
/// kind. Nothing is consumed in that case.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     error: impl FnOnce(Token) -> ParseError)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    if token.kind != kind {
        return Err(error(token.clone()));
    }

    tokens.next();
    trace!(kind = ?token.kind, line = token.line, column = token.column, "consumed token");
    Ok(token)
}

/// Makes sure a token sequence ends with [`TokenKind::EndOfInput`].
///
/// Sequences from the scanner are borrowed unchanged. Otherwise an end token
/// is appended right after the last token.
pub(in crate::interpreter::parser) fn with_end_of_input(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.last() {
        Some(last) if last.is_end_of_input() => Cow::Borrowed(tokens),
        Some(last) => {
            let column = last.column + last.lexeme.chars().count();
            let mut owned = tokens.to_vec();
            owned.push(Token::end_of_input(last.line, column));
            Cow::Owned(owned)
        },
        None => Cow::Owned(vec![Token::end_of_input(1, 1)]),
    }
}
