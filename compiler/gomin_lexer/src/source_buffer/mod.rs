//! Owned, NUL-terminated copy of the source.
//!
//! ```text
//! [ source ... ][ 0x00 ][ 0x00 padding ... ]
//! 0             len      rounded up to a multiple of 64
//! ```
//!
//! The sentinel lets [`Cursor`] detect end of input by reading a `0` byte,
//! and the padding keeps one-byte lookahead in bounds at the very end.

use crate::Cursor;

/// Buffers are padded to a multiple of this many bytes.
const PAD_TO: usize = 64;

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Sources past `u32::MAX` bytes are truncated to that length for
    /// scanning.
    pub fn new(source: &str) -> Self {
        let padded = (source.len() + 1).next_multiple_of(PAD_TO);
        let mut text = String::with_capacity(padded);
        text.push_str(source);
        text.extend(std::iter::repeat('\0').take(padded - source.len()));
        Self {
            text,
            len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// The source without sentinel or padding.
    pub fn as_str(&self) -> &str {
        &self.text[..self.len as usize]
    }

    /// Source, sentinel and padding.
    pub fn as_padded_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, self.len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
