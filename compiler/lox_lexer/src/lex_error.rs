//! Lexical errors.
//!
//! Both kinds are recoverable: the scanner records the error, skips the
//! offending input, and keeps going. Rendering via [`Display`] produces the
//! exact diagnostic line written to the error stream.
//!
//! [`Display`]: std::fmt::Display

use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that matches no dispatch rule.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    /// A string literal not closed before a newline or end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error and the 1-based line where it begins.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

impl LexError {
    pub fn unexpected_character(ch: char, line: u32) -> Self {
        Self {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            line,
        }
    }

    pub fn unterminated_string(line: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedString,
            line,
        }
    }
}
