use std::iter::Peekable;

use crate::{
    ast::{Expr, Sign},
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, operation::parse_operation, utils::current},
        token::{Token, TokenKind},
    },
};

/// Parses a unary sign and the expression it applies to.
///
/// A sign may prefix a number or a parenthesized operation, but not another
/// sign, so `--5` is rejected.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") (NUMBER | operation)
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the sign.
/// - `depth`: Number of operator applications enclosing the sign.
///
/// # Returns
/// An [`Expr::Unary`] node.
///
/// # Errors
/// - `ExpectedExpression` if the current token is not a sign.
/// - `ExpectedOperand` if the sign is followed by anything but a number or
///   `(`.
pub(crate) fn parse_unary_sign<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);
    let sign = Sign::from_kind(token.kind).ok_or_else(|| ParseError::ExpectedExpression { token: token.clone() })?;
    tokens.next();

    let next = current(tokens);
    let operand = match next.kind {
        TokenKind::Number => parse_number(tokens)?,
        TokenKind::LParen => parse_operation(tokens, depth)?,
        _ => return Err(ParseError::ExpectedOperand { token: next.clone() }),
    };

    Ok(Expr::Unary { sign,
                     token: token.clone(),
                     operand: Box::new(operand) })
}

/// Parses a numeric literal.
///
/// Grammar: `number := [0-9]+ ("." [0-9]+)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a number token.
///
/// # Returns
/// An [`Expr::Number`] carrying the literal value.
///
/// # Errors
/// Returns `ExpectedExpression` if the current token is not a number.
pub(crate) fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);

    match (token.kind, token.literal) {
        (TokenKind::Number, Some(value)) => {
            tokens.next();
            Ok(Expr::Number { value,
                              token: token.clone() })
        },
        _ => Err(ParseError::ExpectedExpression { token: token.clone() }),
    }
}
