use crate::{
    interpreter::token::{Token, TokenKind},
    util::num::format_number,
};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` is a closed set: number literals, operator applications with two or
/// more operands, and unary signs. Each node owns its children and keeps the
/// token it was built from for error reporting.
///
/// The [`Display`](std::fmt::Display) implementation prints the canonical
/// fully parenthesized form, which is itself valid source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// The number token.
        token: Token,
    },
    /// An operator applied to two or more operands, folded left to right.
    Operation {
        /// The operator.
        operator: Operator,
        /// The operator token, reported by runtime errors.
        token:    Token,
        /// The operands in source order.
        operands: Vec<Self>,
    },
    /// A sign applied to a number or an operation.
    Unary {
        /// The sign.
        sign:    Sign,
        /// The sign token.
        token:   Token,
        /// The signed expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Gets the token the node was built from.
    /// ## Example
    /// ```
    /// use moose::{ast::Expr, interpreter::token::Token};
    ///
    /// let expr = Expr::Number { value: 4.0,
    ///                           token: Token::number("4", 4.0, 2, 3), };
    ///
    /// assert_eq!(expr.token().line, 2);
    /// ```
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Number { token, .. }
            | Self::Operation { token, .. }
            | Self::Unary { token, .. } => token,
        }
    }
}

/// Represents one of the four arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Returns the operator a token kind denotes inside an application.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Subtract),
            TokenKind::Star => Some(Self::Multiply),
            TokenKind::Slash => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Represents a unary sign prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    /// `+x`, which leaves the value unchanged.
    Plus,
    /// `-x`, arithmetic negation.
    Minus,
}

impl Sign {
    /// Returns the sign a token kind denotes in prefix position.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for Expr {
    /// Prints the canonical form: `(op operand…)` for applications and
    /// `sign operand` for unary signs.
    ///
    /// ## Example
    /// ```
    /// use moose::{interpreter::lexer::scan, interpreter::parser::parse};
    ///
    /// let expr = parse(&scan("( +  2 /* two */ -(* 1.5 2) )").tokens).unwrap();
    ///
    /// assert_eq!(expr.to_string(), "(+ 2 -(* 1.5 2))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", format_number(*value)),
            Self::Operation { operator,
                              operands,
                              .. } => {
                write!(f, "({operator}")?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                write!(f, ")")
            },
            Self::Unary { sign, operand, .. } => write!(f, "{sign}{operand}"),
        }
    }
}
