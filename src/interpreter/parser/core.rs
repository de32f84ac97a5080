use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            operation::parse_operation,
            unary::{parse_number, parse_unary_sign},
            utils::{current, with_end_of_input},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many operator applications may enclose one another. Bounding the depth
/// of the tree bounds the recursion of the parser, the evaluator and the
/// printer alike.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete token sequence into one expression tree.
///
/// This is the entry point for parsing. The sequence should end with the
/// [`TokenKind::EndOfInput`] token produced by the scanner; if it does not, an
/// end token positioned after the last token is assumed. The first grammar
/// violation abandons the parse and is returned as-is, without a partial tree.
///
/// # Errors
/// Returns the [`ParseError`] for the first token that does not fit the
/// grammar.
///
/// # Example
/// ```
/// use moose::interpreter::{lexer::scan, parser::parse};
///
/// let expr = parse(&scan("(- 10 1 2)").tokens).unwrap();
/// assert_eq!(expr.to_string(), "(- 10 1 2)");
///
/// assert!(parse(&scan("(+ 1)").tokens).is_err());
/// assert!(parse(&scan("--5").tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let tokens = with_end_of_input(tokens);
    let mut iter = tokens.iter().peekable();

    let result = parse_program(&mut iter);
    match &result {
        Ok(expr) => debug!(ast = %expr, "parsed program"),
        Err(e) => debug!(error = %e, "parse failed"),
    }
    result
}

/// Parses a whole program: one expression followed by the end of input.
///
/// Grammar: `program := expression EOF`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token.
///
/// # Returns
/// The parsed expression.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if anything follows the expression.
/// - Propagates any errors from expression parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, 0)?;

    let next = current(tokens);
    if next.is_end_of_input() {
        Ok(expr)
    } else {
        Err(ParseError::UnexpectedTrailingTokens { token: next.clone() })
    }
}

/// Parses a single expression.
///
/// The alternative is chosen by looking at the current token only:
///
/// Grammar:
/// ```text
///     expression := NUMBER
///                 | ("+" | "-") (NUMBER | operation)
///                 | operation
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
/// - `depth`: Number of operator applications enclosing the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens);

    match token.kind {
        TokenKind::Number => parse_number(tokens),
        TokenKind::Plus | TokenKind::Minus => parse_unary_sign(tokens, depth),
        TokenKind::LParen => parse_operation(tokens, depth),
        _ => Err(ParseError::ExpectedExpression { token: token.clone() }),
    }
}
