/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks the AST in post-order, folds operator applications
/// left to right and reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces the token
/// sequence and the line index used to quote source lines in diagnostics.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace, line comments and block comments.
/// - Records unrecognized input without aborting the scan.
pub mod lexer;
/// Per-line spans of scanned source text.
pub mod line_index;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent implementation of the grammar with one
/// token of lookahead and no backtracking.
///
/// # Responsibilities
/// - Converts tokens into expression trees.
/// - Validates the grammar, reporting the first violation with its token.
pub mod parser;
/// The token model shared by the lexer and the parser.
pub mod token;
