/// Core parsing entry points.
///
/// Holds `parse`, the program and expression rules, and the `ParseResult`
/// alias shared by the other parser modules.
pub mod core;
/// Operator application parsing.
///
/// Parses `(op operand operand…)` forms and enforces that every application
/// has at least two operands and a closing parenthesis.
pub mod operation;
/// Unary sign and number parsing.
pub mod unary;
/// Token stream helpers shared by the parser: lookahead, `consume`, and
/// end-of-input handling.
pub mod utils;

pub use self::core::{MAX_NESTING_DEPTH, parse};
