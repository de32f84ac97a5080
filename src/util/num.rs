/// Formats a number the way results are printed.
///
/// Values with a zero fractional part print without a trailing `.0`, so
/// integer arithmetic looks like integer arithmetic. Fractions are kept
/// verbatim. Rust's `Display` for `f64` never switches to exponent notation, so
/// the output of a finite value is always valid source for a literal (after
/// its sign). Non-finite values print as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use moose::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    let text = value.to_string();
    match text.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => text,
    }
}
