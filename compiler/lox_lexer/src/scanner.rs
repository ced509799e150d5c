//! Single-pass scanner producing [`Token`]s and [`LexError`]s.
//!
//! # Design
//!
//! Main dispatch decodes one code point and matches on it. Each arm calls a
//! focused method that advances the cursor and pushes at most one token.
//! The sub-scanners (string, number, identifier, line comment) are entered
//! only from dispatch and always return to it; none of them nests.
//!
//! Errors never abort the scan. They are collected alongside the tokens and
//! returned together in a [`ScanOutput`].

use lox_lexer_core::char_class::{is_alpha, is_alpha_numeric, is_digit};
use lox_lexer_core::Cursor;

use crate::{keywords, number, ExitStatus, LexError, Literal, Token, TokenKind};

/// Result of scanning one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Tokens in source order, always ending with exactly one `Eof`.
    pub tokens: Vec<Token>,
    /// Lexical errors in encounter order.
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// Whether any lexical error occurred anywhere in the buffer.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Process exit status for this scan.
    pub fn exit_status(&self) -> ExitStatus {
        if self.had_error() {
            ExitStatus::LexError
        } else {
            ExitStatus::Success
        }
    }
}

/// One-shot scanner over a cursor.
///
/// [`scan`](Self::scan) consumes the scanner, so an instance runs exactly
/// one scan and cannot be resumed.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan to the end of input.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.cursor.source_len()))]
    pub fn scan(mut self) -> ScanOutput {
        while !self.cursor.is_eof() {
            self.scan_token();
        }
        self.tokens.push(Token::eof());

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.cursor.line(),
            "scan complete"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.advance_char() {
            '(' => self.single(start, TokenKind::LeftParen),
            ')' => self.single(start, TokenKind::RightParen),
            '{' => self.single(start, TokenKind::LeftBrace),
            '}' => self.single(start, TokenKind::RightBrace),
            ',' => self.single(start, TokenKind::Comma),
            '.' => self.single(start, TokenKind::Dot),
            '-' => self.single(start, TokenKind::Minus),
            '+' => self.single(start, TokenKind::Plus),
            ';' => self.single(start, TokenKind::Semicolon),
            '*' => self.single(start, TokenKind::Star),
            '!' => self.with_equal(start, TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.with_equal(start, TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.with_equal(start, TokenKind::Less, TokenKind::LessEqual),
            '>' => self.with_equal(start, TokenKind::Greater, TokenKind::GreaterEqual),
            '/' => self.slash_or_comment(start),
            '"' => self.string(start),
            // The cursor already counted the newline.
            ' ' | '\t' | '\r' | '\n' => {}
            c if is_digit(c) => self.number(start),
            c if is_alpha(c) => self.identifier(start),
            c => self.error(LexError::unexpected_character(c, self.cursor.line())),
        }
    }

    // ─── Punctuation & Operators ─────────────────────────────────────

    fn single(&mut self, start: u32, kind: TokenKind) {
        self.push(start, kind, None);
    }

    /// `!` `=` `<` `>`, each optionally followed by `=`.
    fn with_equal(&mut self, start: u32, one: TokenKind, two: TokenKind) {
        let kind = if self.cursor.eat(b'=') { two } else { one };
        self.push(start, kind, None);
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) {
        if self.cursor.eat(b'/') {
            self.cursor.eat_until_newline_or_eof();
        } else {
            self.push(start, TokenKind::Slash, None);
        }
    }

    // ─── Literals ────────────────────────────────────────────────────

    /// Strings end at the next `"` on the same line. The newline that
    /// terminates an unclosed string is left for dispatch to consume.
    fn string(&mut self, start: u32) {
        let line = self.cursor.line();
        if self.cursor.skip_to_string_delim() == b'"' {
            let content = self.cursor.slice_from(start + 1).into_owned();
            self.cursor.advance();
            self.push(start, TokenKind::String, Some(Literal::Str(content)));
        } else {
            self.error(LexError::unterminated_string(line));
        }
    }

    /// `d+` with an optional `.d+`. A `.` not followed by a digit is left
    /// for the next dispatch step.
    fn number(&mut self, start: u32) {
        self.cursor.eat_while(|b| is_digit(b.into()));
        if self.cursor.current() == b'.' && is_digit(self.cursor.peek().into()) {
            self.cursor.advance();
            self.cursor.eat_while(|b| is_digit(b.into()));
        }
        let lexeme = self.cursor.slice_from(start);
        let literal = Literal::Num(number::canonicalize(&lexeme));
        self.push(start, TokenKind::Number, Some(literal));
    }

    fn identifier(&mut self, start: u32) {
        self.cursor.eat_while(|b| is_alpha_numeric(b.into()));
        let lexeme = self.cursor.slice_from(start);
        let kind = keywords::lookup(&lexeme).unwrap_or(TokenKind::Identifier);
        self.push(start, kind, None);
    }

    // ─── Output ──────────────────────────────────────────────────────

    fn push(&mut self, start: u32, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(start);
        self.tokens.push(Token::new(kind, lexeme, literal));
    }

    fn error(&mut self, err: LexError) {
        tracing::trace!(line = err.line, kind = %err.kind, "recovered lexical error");
        self.errors.push(err);
    }
}
