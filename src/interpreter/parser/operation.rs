use std::iter::Peekable;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
            utils::{consume, current},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a parenthesized operator application.
///
/// The operator is followed by two or more operands. Operands keep being
/// parsed while the current token can start an expression; the application
/// must then be closed by `)`.
///
/// Grammar:
/// ```text
///     operation := "(" operator expression expression+ ")"
///     operator  := "+" | "-" | "*" | "/"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `depth`: Number of operator applications enclosing this one.
///
/// # Returns
/// An [`Expr::Operation`] with its operands in source order.
///
/// # Errors
/// - `ExpectedExpression` if the current token is not `(`.
/// - `NestingTooDeep` if `depth` reached [`MAX_NESTING_DEPTH`].
/// - `ExpectedOperator` if `(` is not followed by an operator.
/// - `TooFewOperands` if `)` follows the first operand.
/// - `MissingClosingParen` if the input ends before `)`.
/// - `ExpectedClosingParen` if something else stands where `)` belongs.
pub(crate) fn parse_operation<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let open = consume(tokens, TokenKind::LParen, |token| ParseError::ExpectedExpression { token })?;
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { token: open.clone() });
    }

    let token = current(tokens);
    let operator = Operator::from_kind(token.kind).ok_or_else(|| ParseError::ExpectedOperator { token: token.clone() })?;
    tokens.next();

    let mut operands = vec![parse_expression(tokens, depth + 1)?];
    loop {
        let next = current(tokens);
        match next.kind {
            TokenKind::LParen | TokenKind::Number | TokenKind::Plus | TokenKind::Minus => {
                operands.push(parse_expression(tokens, depth + 1)?);
            },
            TokenKind::RParen if operands.len() < 2 => {
                return Err(ParseError::TooFewOperands { token: next.clone() });
            },
            _ if operands.len() < 2 => {
                return Err(ParseError::ExpectedExpression { token: next.clone() });
            },
            _ => break,
        }
    }

    consume(tokens, TokenKind::RParen, |token| {
        if token.lexeme.is_empty() {
            ParseError::MissingClosingParen { token }
        } else {
            ParseError::ExpectedClosingParen { token }
        }
    })?;

    Ok(Expr::Operation { operator,
                         token: token.clone(),
                         operands })
}
