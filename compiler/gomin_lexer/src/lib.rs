//! Whitespace-preserving tokenizer for gomin.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► RawScanner ──► Tokenizer
//!          (sentinel)       (bytes)    (kind, len)    (Token, comments dropped)
//! ```
//!
//! Unlike a compiler lexer, nothing here skips whitespace: every space,
//! tab, newline, vertical tab, form feed and carriage return comes out as
//! its own single-character token. Multi-character operators are split the
//! same way, so `:=` is scanned as `:` followed by `=`. Downstream rewriting
//! relies on both properties to count tokens precisely.
//!
//! Comments are the one lossy step: [`RawScanner`] reports them, and
//! [`Tokenizer`] drops them.

mod cursor;
mod kind;
mod raw_scanner;
mod source_buffer;
mod tokenizer;

pub use cursor::Cursor;
pub use kind::{RawToken, TokenKind};
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tokenizer::{Token, Tokenizer};
