//! Token categories produced by the raw scanner.

/// Lexical category of a token.
///
/// Discriminants are grouped by range so related kinds stay adjacent:
/// words and literals `0..16`, punctuation `16`, trivia `32..48`,
/// control `255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Words & Literals ===
    /// Identifier or keyword (`count`, `var`, `_tmp`).
    Ident = 0,
    /// Integer, float or imaginary literal (`42`, `0x1F`, `1e-3`, `.5`).
    Number = 1,
    /// Interpreted string literal (`"text"`), possibly unterminated.
    String = 2,
    /// Raw string literal (`` `text` ``), may span lines.
    RawString = 3,
    /// Rune literal (`'x'`), possibly unterminated.
    Char = 4,

    // === Punctuation ===
    /// Any other single character: operators, delimiters, interior NUL.
    Punct = 16,

    // === Trivia ===
    /// One whitespace character: space, tab, `\n`, `\v`, `\f` or `\r`.
    Whitespace = 32,
    /// `// ...` up to, not including, the newline.
    LineComment = 33,
    /// `/* ... */`, or to EOF when unterminated.
    BlockComment = 34,

    // === Control ===
    /// End of input. Always zero length.
    Eof = 255,
}

impl TokenKind {
    /// Returns `true` for comments, which the [`Tokenizer`](crate::Tokenizer) drops.
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    /// Returns `true` for string, raw string, rune and number literals.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Number | Self::String | Self::RawString | Self::Char
        )
    }

    /// Short human-readable name, used by diagnostic traces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "ident",
            Self::Number => "number",
            Self::String => "string",
            Self::RawString => "raw-string",
            Self::Char => "char",
            Self::Punct => "punct",
            Self::Whitespace => "whitespace",
            Self::LineComment => "line-comment",
            Self::BlockComment => "block-comment",
            Self::Eof => "eof",
        }
    }
}

/// Raw token: a kind and a byte length. The start position is implicit in
/// the scanner's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub len: u32,
}
