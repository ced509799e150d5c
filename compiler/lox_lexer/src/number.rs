//! Canonical decimal rendering of number literals.
//!
//! The rendering is purely textual: no value ever passes through `f64`, so
//! literals of any length keep every significant digit.

/// Render a number lexeme (`d+` or `d+.d+`) in canonical form.
///
/// Leading zeros of the integer part are stripped down to a single `0`;
/// trailing zeros of the fraction are stripped, and an empty fraction
/// becomes `0`. The result always contains exactly one `.`.
///
/// ```
/// use lox_lexer::number::canonicalize;
///
/// assert_eq!(canonicalize("042.3000"), "42.3");
/// assert_eq!(canonicalize("7"), "7.0");
/// assert_eq!(canonicalize("0.50"), "0.5");
/// ```
pub fn canonicalize(lexeme: &str) -> String {
    let (int_part, frac_part) = lexeme.split_once('.').unwrap_or((lexeme, ""));

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let frac_part = match frac_part.trim_end_matches('0') {
        "" => "0",
        digits => digits,
    };

    format!("{int_part}.{frac_part}")
}
