/// Lexical errors.
///
/// Problems found while scanning source text, such as characters outside the
/// language or an unterminated block comment. They are collected rather than
/// thrown so one scan reports every problem.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence.
/// Parse errors include missing operators, missing operands, unbalanced
/// parentheses and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, which in
/// this language means division by zero.
pub mod runtime_error;
/// The error type shared by every stage of the pipeline.
///
/// Wraps the lexical, parse and runtime errors so the driver can report them
/// uniformly and map them onto process exit codes.
pub mod core;
/// Diagnostic rendering.
///
/// Formats an error together with the offending source line and a caret under
/// the failing column, for both the interactive prompt and file mode.
pub mod diagnostic;

pub use self::core::{EXIT_DATA_ERROR, EXIT_RUNTIME_ERROR, Error, ErrorKind};

pub use diagnostic::{RenderMode, render};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
