/// Numeric formatting helpers.
///
/// This module turns evaluation results into the text the interpreter prints,
/// dropping the fractional part of integer-valued results.
pub mod num;
