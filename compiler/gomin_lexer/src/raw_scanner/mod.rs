//! Hand-written raw scanner producing `(TokenKind, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or validate literals; malformed input is scanned best-effort
//! and never fails.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Whitespace is never skipped:
//! each whitespace byte is its own token. Every character that does not
//! start an identifier, number, literal or comment is a one-character
//! [`TokenKind::Punct`] token, so compound operators come out split
//! (`:=` is `:` then `=`, `==` is `=` then `=`).

use crate::cursor::Cursor;
use crate::kind::{RawToken, TokenKind};

/// Allocation-free scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `TokenKind::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => RawToken {
                kind: TokenKind::Eof,
                len: 0,
            },
            b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => self.single(start, TokenKind::Whitespace),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'"' => self.quoted(start, b'"', TokenKind::String),
            b'\'' => self.quoted(start, b'\'', TokenKind::Char),
            b'`' => self.raw_string(start),
            b'/' => self.slash_or_comment(start),
            0x80..=0xFF => self.non_ascii(start),
            // Operators, delimiters, control bytes and interior NULs
            _ => self.single(start, TokenKind::Punct),
        }
    }

    /// Build a token spanning `start` to the current position.
    #[inline]
    fn token(&self, start: u32, kind: TokenKind) -> RawToken {
        RawToken {
            kind,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given kind.
    #[inline]
    fn single(&mut self, start: u32, kind: TokenKind) -> RawToken {
        self.cursor.advance();
        self.token(start, kind)
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char(); // first char already validated
        self.eat_ident_continue();
        self.token(start, TokenKind::Ident)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_alphanumeric() {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    /// Non-ASCII lead byte: a Unicode letter starts an identifier, anything
    /// else is a one-character punctuation token.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        if self.cursor.current_char().is_alphabetic() {
            self.identifier(start)
        } else {
            self.cursor.advance_char();
            self.token(start, TokenKind::Punct)
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'.' {
            // `.5`: fraction only
            self.cursor.eat_while(is_decimal_digit);
            self.eat_exponent(b'e', b'E');
        } else if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            self.cursor.advance();
            self.eat_mantissa(is_hex_digit);
            self.eat_exponent(b'p', b'P');
        } else if first == b'0' && matches!(self.cursor.current(), b'b' | b'B' | b'o' | b'O') {
            self.cursor.advance();
            self.cursor.eat_while(is_decimal_digit);
        } else {
            self.eat_mantissa(is_decimal_digit);
            self.eat_exponent(b'e', b'E');
        }

        // Imaginary suffix
        if self.cursor.current() == b'i' {
            self.cursor.advance();
        }
        self.token(start, TokenKind::Number)
    }

    /// Integer digits, then an optional `.` and fraction digits.
    fn eat_mantissa(&mut self, digit: fn(u8) -> bool) {
        self.cursor.eat_while(digit);
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(digit);
        }
    }

    fn eat_exponent(&mut self, lower: u8, upper: u8) {
        let b = self.cursor.current();
        if b != lower && b != upper {
            return;
        }
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        self.cursor.eat_while(is_decimal_digit);
    }

    // ─── Literals ───────────────────────────────────────────────────

    /// Interpreted string or rune literal. An unterminated literal ends
    /// before the newline (or at EOF) and keeps its kind.
    fn quoted(&mut self, start: u32, quote: u8, kind: TokenKind) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_quoted(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                        self.cursor.advance_char(); // escaped char
                    }
                }
                b'\n' | 0 => return self.token(start, kind),
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return self.token(start, kind);
                }
            }
        }
    }

    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '`'
        self.cursor.eat_past(b"`");
        self.token(start, TokenKind::RawString)
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_line();
                self.token(start, TokenKind::LineComment)
            }
            b'*' => {
                self.cursor.advance_n(2);
                self.cursor.eat_past(b"*/");
                self.token(start, TokenKind::BlockComment)
            }
            _ => self.single(start, TokenKind::Punct),
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// ASCII identifier continuation: letters, digits, underscore.
/// The sentinel byte (0x00) maps to `false`, terminating loops.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'_'
}
