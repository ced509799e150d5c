//! Character-class predicates for scanner dispatch.
//!
//! Only ASCII letters and digits are recognized. Any other code point,
//! including non-ASCII letters, falls through to the unexpected-character
//! path of the scanner.

/// `0`-`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII letter or underscore: the characters that may start an identifier.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier continuation: [`is_alpha`] or [`is_digit`].
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
