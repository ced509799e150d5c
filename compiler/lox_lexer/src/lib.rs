//! Scanner for the Lox scripting language.
//!
//! Converts raw source bytes into a flat [`Token`] sequence plus the
//! [`LexError`]s encountered along the way. The scanner never prints;
//! callers render tokens and errors through their `Display` impls.
//!
//! ```
//! let output = lox_lexer::scan(b"var answer = 42;");
//! let lines: Vec<String> = output.tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     lines,
//!     [
//!         "VAR var null",
//!         "IDENTIFIER answer null",
//!         "EQUAL = null",
//!         "NUMBER 42 42.0",
//!         "SEMICOLON ; null",
//!         "EOF  null",
//!     ]
//! );
//! assert!(!output.had_error());
//! ```
//!
//! # Tracing
//!
//! - `RUST_LOG=lox_lexer=debug`: one span per scan with a token/error summary.
//! - `RUST_LOG=lox_lexer=trace`: additionally, one event per recovered error.

mod keywords;
mod lex_error;
pub mod number;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{ScanOutput, Scanner};
pub use token::{Literal, Token, TokenKind};

use lox_lexer_core::SourceBuffer;

/// Process exit status derived from a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// No lexical errors.
    Success,
    /// At least one lexical error.
    LexError,
}

impl ExitStatus {
    /// Numeric exit code: `0` or `65`.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::LexError => 65,
        }
    }
}

/// Scan a complete source buffer.
///
/// Convenience wrapper that builds a [`SourceBuffer`] and runs a fresh
/// [`Scanner`] over it.
pub fn scan(source: &[u8]) -> ScanOutput {
    let buf = SourceBuffer::new(source);
    Scanner::new(buf.cursor()).scan()
}
