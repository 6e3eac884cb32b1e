//! Byte cursor for the raw scanner.
//!
//! The cursor never bounds-checks against the source length on the hot
//! path: it relies on the NUL sentinel and zero padding that
//! [`SourceBuffer`](crate::SourceBuffer) appends. A NUL before the end of
//! the source is an ordinary byte; only a NUL at or past `source_len` is
//! end of input.

/// Position in a sentinel-terminated source.
///
/// `Copy`, so the tokenizer can hold one cursor for slicing while the
/// scanner moves another.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source, sentinel and padding.
    text: &'a str,
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, source_len: u32) -> Self {
        debug_assert_eq!(
            text.as_bytes().get(source_len as usize),
            Some(&0),
            "buffer must carry a NUL sentinel at source_len"
        );
        Self {
            text,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, offset: u32) -> u8 {
        self.text
            .as_bytes()
            .get((self.pos + offset) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Byte under the cursor; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    /// Byte after the one under the cursor.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    /// Character under the cursor, `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.text
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Step over the whole UTF-8 character under the cursor.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += utf8_width(self.current());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text between two token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        &self.text[start as usize..end as usize]
    }

    /// Advance while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Unscanned source bytes, without sentinel.
    fn rest(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        let start = (self.pos as usize).min(end);
        &self.text.as_bytes()[start..end]
    }

    /// Move to the offset `found` returned by a search over [`Self::rest`],
    /// or to end of input when nothing was found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() never exceed source_len, a u32"
    )]
    fn jump(&mut self, found: Option<usize>) -> bool {
        match found {
            Some(offset) => {
                self.pos += offset as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Line comment body: stop on the `\n` (not consumed) or at end of input.
    pub fn eat_line(&mut self) {
        let found = memchr::memchr(b'\n', self.rest());
        self.jump(found);
    }

    /// Consume through the next `needle`. Returns `false` and stops at end
    /// of input when there is none.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        let found = memchr::memmem::find(self.rest(), needle).map(|at| at + needle.len());
        self.jump(found)
    }

    /// Skip plain literal content. Stops on `quote`, `\` or `\n` and returns
    /// that byte, or `0` at end of input.
    pub fn skip_quoted(&mut self, quote: u8) -> u8 {
        let found = memchr::memchr3(quote, b'\\', b'\n', self.rest());
        if self.jump(found) {
            self.current()
        } else {
            0
        }
    }
}

/// Width of the UTF-8 sequence led by `byte`.
fn utf8_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
