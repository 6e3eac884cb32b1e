//! Positioned token stream with comments removed.
//!
//! [`Tokenizer`] is the lazy, finite, non-restartable sequence the rewrite
//! engine consumes. It wraps a [`RawScanner`], slices each raw token out of
//! the source, tracks 1-based line and column, and silently skips comments.
//! The newline that ends a line comment is kept.

use crate::kind::TokenKind;
use crate::raw_scanner::RawScanner;
use crate::{Cursor, SourceBuffer};

/// A token borrowed from the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column (in characters) of the first character.
    pub column: u32,
}

impl Token<'_> {
    #[inline]
    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Identifier token spelling exactly `keyword`.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.is_ident() && self.text == keyword
    }

    /// Punctuation token consisting of exactly `ch`.
    #[inline]
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct && self.text.len() == ch.len_utf8() && self.text.starts_with(ch)
    }
}

/// Iterator over the non-comment tokens of a [`SourceBuffer`].
pub struct Tokenizer<'src> {
    scanner: RawScanner<'src>,
    /// Separate copy of the cursor, kept at position 0 for slicing.
    source: Cursor<'src>,
    pos: u32,
    line: u32,
    column: u32,
}

impl<'src> Tokenizer<'src> {
    pub fn new(buf: &'src SourceBuffer) -> Self {
        let cursor = buf.cursor();
        Self {
            scanner: RawScanner::new(cursor),
            source: cursor,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Move line/column past `text`.
    fn advance_position(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(last_newline) => {
                let newlines = text.bytes().filter(|&b| b == b'\n').count();
                self.line = self.line.saturating_add(count_u32(newlines));
                self.column = count_u32(text[last_newline + 1..].chars().count()).saturating_add(1);
            }
            None => {
                self.column = self.column.saturating_add(count_u32(text.chars().count()));
            }
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            let raw = self.scanner.next_token();
            if raw.kind == TokenKind::Eof {
                return None;
            }

            let start = self.pos;
            self.pos += raw.len;
            let text = self.source.slice(start, self.pos);
            let (line, column) = (self.line, self.column);
            self.advance_position(text);

            if raw.kind.is_comment() {
                continue;
            }
            return Some(Token {
                kind: raw.kind,
                text,
                line,
                column,
            });
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Saturating `usize` -> `u32` for line/column arithmetic.
fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
