//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor tracks two things: the byte offset of the next unread byte and
//! the 1-based line number. The line number increments exactly once for
//! every `\n` the cursor steps over, whichever method consumed it.
//!
//! EOF is detected when the current byte equals the sentinel (`0x00`) and
//! the position has reached the source length. A null at `pos < source_len`
//! is an interior null and is returned as an ordinary character.

use std::borrow::Cow;

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is a plain assignment.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all bytes after it are `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    /// 1-based line of the current position.
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Continuation bytes and invalid leading bytes report a width of 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the code point at the current position without consuming it.
    ///
    /// Returns the character and its width in bytes. A malformed or truncated
    /// sequence decodes as `U+FFFD` with width 1. At EOF returns `('\0', 0)`.
    pub fn current_char(&self) -> (char, u32) {
        if self.is_eof() {
            return ('\0', 0);
        }
        let width = Self::utf8_char_width(self.current());
        let start = self.pos as usize;
        let end = (start + width as usize).min(self.source_len as usize);
        match std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
        {
            Some(c) => (c, width),
            None => (char::REPLACEMENT_CHARACTER, 1),
        }
    }

    /// Consume one code point and return it.
    ///
    /// Steps over a `\n` increment the line counter. At EOF nothing is
    /// consumed and `'\0'` is returned.
    pub fn advance_char(&mut self) -> char {
        let (c, width) = self.current_char();
        self.pos += width;
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Advance the cursor by one byte.
    ///
    /// # Contract
    ///
    /// The current byte must be an ASCII byte other than `\n`; use
    /// [`advance_char`](Self::advance_char) when the byte is not known.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current() != b'\n', "use advance_char to cross lines");
        self.pos += 1;
    }

    /// Consume the current byte if it equals `expected`.
    ///
    /// `expected` must not be `\n`. Never matches at EOF.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.is_eof() || self.current() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` and `pred(b'\n')` must return `false`. The sentinel then
    /// terminates the loop and the line counter stays correct.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or EOF, leaving the newline unconsumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past string content to the next `"` or `\n`.
    ///
    /// Returns the byte found, or `0` at EOF. Neither delimiter is consumed.
    /// Both are ASCII, so the search never stops inside a multi-byte
    /// character.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'"', b'\n', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Extract source text between two byte offsets.
    ///
    /// Borrowed when the bytes are valid UTF-8, otherwise each malformed
    /// sequence is replaced by `U+FFFD`.
    pub fn slice(&self, start: u32, end: u32) -> Cow<'a, str> {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        String::from_utf8_lossy(&self.buf[start as usize..end as usize])
    }

    /// Extract source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> Cow<'a, str> {
        self.slice(start, self.pos)
    }
}
