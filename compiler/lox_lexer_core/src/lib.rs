//! Low-level building blocks for the Lox scanner.
//!
//! This crate owns the raw bytes of a source file and the cursor that walks
//! them. It knows nothing about tokens or keywords; the scanner in
//! `lox_lexer` builds on top of it.
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source bytes
//! - [`Cursor`]: byte offset plus 1-based line number, decoding one code
//!   point per step
//! - [`char_class`]: the digit / alphabetic predicates used for dispatch

pub mod char_class;
mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
