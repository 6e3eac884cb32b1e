//! Token window: bounded lookback plus on-demand raw lookahead.
//!
//! ```text
//!           behind (SlidingWindow<Slot>)          ahead (raw tokens)
//!  out <- [ slot ][ slot ][ slot ][ slot ] <- next_token() <- [ tok ][ tok ] <- source
//!                                              ^ peek_raw(n) fills `ahead`
//! ```
//!
//! Every token reaches output through the same path: it is pulled with
//! [`TokenWindow::next_token`], buffered as a [`Slot`], possibly patched
//! while still buffered, then flushed or drained. Lookahead never consumes
//! tokens out of band: [`TokenWindow::peek_raw`] only parks them in
//! `ahead`, from where `next_token` hands them out in order.

use std::borrow::Cow;
use std::collections::VecDeque;

use gomin_lexer::Token;

use crate::SlidingWindow;

/// A buffered token and the text that will be written for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<'src> {
    /// The token as scanned from the source.
    pub token: Token<'src>,
    /// Output text; differs from `token.text` once patched.
    pub output: Cow<'src, str>,
}

impl<'src> Slot<'src> {
    /// A slot that writes the token unchanged.
    pub fn verbatim(token: Token<'src>) -> Self {
        Self {
            token,
            output: Cow::Borrowed(token.text),
        }
    }

    /// A slot that writes `output` in place of the token text.
    pub fn patched(token: Token<'src>, output: impl Into<Cow<'src, str>>) -> Self {
        Self {
            token,
            output: output.into(),
        }
    }

    /// Output is exactly one space character.
    pub fn is_space(&self) -> bool {
        self.output == " "
    }
}

/// Lookback window over buffered slots, fed from a token source with
/// unbounded raw lookahead.
pub struct TokenWindow<'src, I> {
    source: I,
    ahead: VecDeque<Token<'src>>,
    behind: SlidingWindow<Slot<'src>>,
}

impl<'src, I> TokenWindow<'src, I>
where
    I: Iterator<Item = Token<'src>>,
{
    pub fn new(source: I, capacity: usize) -> Self {
        Self {
            source,
            ahead: VecDeque::new(),
            behind: SlidingWindow::new(capacity),
        }
    }

    /// Next token in source order: previously peeked tokens first.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        self.ahead.pop_front().or_else(|| self.source.next())
    }

    /// Look `n` tokens past the current one without consuming anything.
    ///
    /// `peek_raw(0)` is the token the next [`next_token`](Self::next_token)
    /// call will return. `None` means the source ends first.
    pub fn peek_raw(&mut self, n: usize) -> Option<&Token<'src>> {
        while self.ahead.len() <= n {
            let token = self.source.next()?;
            self.ahead.push_back(token);
        }
        self.ahead.get(n)
    }

    /// Buffer a slot. A full window rejects it and hands it back.
    pub fn push(&mut self, slot: Slot<'src>) -> Result<(), Slot<'src>> {
        self.behind.push(slot)
    }

    /// The most recently buffered slot.
    pub fn last(&self) -> Option<&Slot<'src>> {
        self.behind.peek_back(0)
    }

    /// The slot `offset` positions before the most recently buffered one.
    pub fn peek_back(&self, offset: usize) -> Option<&Slot<'src>> {
        self.behind.peek_back(offset)
    }

    /// Patch a buffered slot in place. Returns `false` if it is gone.
    pub fn replace_back(&mut self, offset: usize, slot: Slot<'src>) -> bool {
        self.behind.replace_back(offset, slot)
    }

    /// Oldest slot, once the lookback window is full.
    pub fn flush(&mut self) -> Option<Slot<'src>> {
        self.behind.flush()
    }

    /// Oldest slot, regardless of fill level. Used to drain at end of input.
    pub fn pop_oldest(&mut self) -> Option<Slot<'src>> {
        self.behind.pop_oldest()
    }

    /// Number of buffered slots.
    pub fn buffered(&self) -> usize {
        self.behind.len()
    }
}
