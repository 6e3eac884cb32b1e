//! Rewrite driver.
//!
//! One forward pass over the token stream. Each token is buffered in the
//! [`TokenWindow`], run through the detection state machine, and the oldest
//! buffered token is written once the window is full. Corrections only
//! ever touch tokens that are still buffered.
//!
//! # Detection
//!
//! ```text
//!            var + (ws, ident) ahead, newly registered
//!   Idle ───────────────────────────────────────────► SawVar
//!    ▲ │                                                 │
//!    │ │ ':'                                  whitespace │
//!    │ ▼                                                 │
//!   SawColon ──'='──► short assignment ──► Idle ◄────────┘
//! ```
//!
//! - `SawVar`: the whitespace after `var` is written as one space; the
//!   identifier that follows is already in the table and gets its short
//!   name through ordinary substitution.
//! - `SawColon` + `=`: the declared identifier sits two slots behind the
//!   `=`, or three when a whitespace slot sits between it and the `:`.
//!
//! A `var` or `:` near end of input with too few tokens left is simply
//! abandoned: whatever was seen is written unchanged.

use std::io::Write;

use gomin_lexer::Token;
use tracing::{debug, trace};

use crate::token_window::{Slot, TokenWindow};
use crate::{RenameTable, RewriteError, ShortNames};

/// Lookback window size used when none is configured.
pub const DEFAULT_WINDOW: usize = 4;

/// Smallest usable window: a `:=` target three slots behind the `=` must
/// still be buffered when the `=` arrives.
pub const MIN_WINDOW: usize = 4;

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Number of tokens held back before writing.
    pub window: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Tokens pulled from the source.
    pub tokens_read: usize,
    /// Tokens written to the sink. Lower than `tokens_read` by the number
    /// of collapsed spaces.
    pub tokens_written: usize,
    /// Names registered in this run.
    pub renamed: usize,
    /// Declarations left as written because no short name was free.
    pub exhausted: usize,
}

/// The rewrite engine: owns the rename table and the short-name registry
/// across one or more runs.
#[derive(Debug)]
pub struct Rewriter {
    table: RenameTable,
    names: ShortNames,
    options: RewriteOptions,
}

impl Rewriter {
    /// Engine with an empty rename table and allocator.
    pub fn new(options: RewriteOptions) -> Result<Self, RewriteError> {
        Self::with_state(RenameTable::new(), ShortNames::new(), options)
    }

    /// Engine that continues from existing state, so a name registered in
    /// an earlier run keeps its short name.
    pub fn with_state(
        table: RenameTable,
        names: ShortNames,
        options: RewriteOptions,
    ) -> Result<Self, RewriteError> {
        if options.window < MIN_WINDOW {
            return Err(RewriteError::WindowTooSmall {
                requested: options.window,
                minimum: MIN_WINDOW,
            });
        }
        Ok(Self {
            table,
            names,
            options,
        })
    }

    pub fn table(&self) -> &RenameTable {
        &self.table
    }

    pub fn options(&self) -> RewriteOptions {
        self.options
    }

    /// Hand back the state for reuse or reporting.
    pub fn into_parts(self) -> (RenameTable, ShortNames) {
        (self.table, self.names)
    }

    /// Rewrite `tokens` into `out` in a single pass.
    ///
    /// Write failures abort the run; tokens written before the failure
    /// stay written.
    #[tracing::instrument(level = "debug", skip_all, fields(window = self.options.window))]
    pub fn rewrite<'src, I, W>(
        &mut self,
        tokens: I,
        out: &mut W,
    ) -> Result<RewriteStats, RewriteError>
    where
        I: IntoIterator<Item = Token<'src>>,
        W: Write + ?Sized,
    {
        let mut pass = Pass {
            window: TokenWindow::new(tokens.into_iter(), self.options.window),
            table: &mut self.table,
            names: &mut self.names,
            out,
            state: Detect::Idle,
            stats: RewriteStats::default(),
        };
        pass.run()?;
        let stats = pass.stats;
        debug!(
            tokens_read = stats.tokens_read,
            tokens_written = stats.tokens_written,
            renamed = stats.renamed,
            exhausted = stats.exhausted,
            "rewrite finished"
        );
        Ok(stats)
    }
}

/// Detection state carried from one token to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Detect {
    Idle,
    /// A `var` declaration was registered; its whitespace comes next.
    SawVar,
    /// The previous token was `:`.
    SawColon,
}

/// State of one run.
struct Pass<'a, 'src, I, W: ?Sized> {
    window: TokenWindow<'src, I>,
    table: &'a mut RenameTable,
    names: &'a mut ShortNames,
    out: &'a mut W,
    state: Detect,
    stats: RewriteStats,
}

impl<'src, I, W> Pass<'_, 'src, I, W>
where
    I: Iterator<Item = Token<'src>>,
    W: Write + ?Sized,
{
    fn run(&mut self) -> Result<(), RewriteError> {
        while let Some(token) = self.window.next_token() {
            self.stats.tokens_read += 1;
            trace!(
                line = token.line,
                column = token.column,
                kind = token.kind.name(),
                text = ?token.text,
                "token"
            );

            self.buffer(token)?;
            self.state = self.transition(token);

            if let Some(slot) = self.window.flush() {
                self.emit(&slot)?;
            }
        }

        while let Some(slot) = self.window.pop_oldest() {
            self.emit(&slot)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Buffer `token`, applying space normalization and substitution.
    fn buffer(&mut self, token: Token<'src>) -> Result<(), RewriteError> {
        let slot = if self.state == Detect::SawVar && token.is_whitespace() {
            Slot::patched(token, " ")
        } else if let Some(short) = self.known_short_name(&token) {
            Slot::patched(token, short)
        } else {
            Slot::verbatim(token)
        };

        if slot.is_space() && self.window.last().is_some_and(Slot::is_space) {
            self.window.replace_back(0, slot);
            return Ok(());
        }

        if let Err(slot) = self.window.push(slot) {
            // Only reachable if a flush was skipped; write the oldest to
            // keep token order.
            if let Some(oldest) = self.window.pop_oldest() {
                self.emit(&oldest)?;
            }
            let pushed = self.window.push(slot).is_ok();
            debug_assert!(pushed, "window has room after writing the oldest slot");
        }
        Ok(())
    }

    fn transition(&mut self, token: Token<'src>) -> Detect {
        match self.state {
            Detect::SawColon if token.is_punct('=') => {
                self.short_assignment();
                return Detect::Idle;
            }
            Detect::SawVar if token.is_whitespace() => return Detect::Idle,
            _ => {}
        }

        if token.is_keyword("var") {
            self.var_declaration()
        } else if token.is_punct(':') {
            Detect::SawColon
        } else {
            Detect::Idle
        }
    }

    /// `var` was just buffered. Expect exactly one whitespace token and an
    /// identifier ahead.
    fn var_declaration(&mut self) -> Detect {
        if !self.window.peek_raw(0).is_some_and(Token::is_whitespace) {
            return Detect::Idle;
        }
        let Some(name) = self.window.peek_raw(1).filter(|t| t.is_ident()).copied() else {
            return Detect::Idle;
        };

        if self.declare(name.text) {
            Detect::SawVar
        } else {
            Detect::Idle
        }
    }

    /// `=` was just buffered after `:`. Rename the declared identifier in
    /// place if it is still in the window.
    fn short_assignment(&mut self) {
        let offset = match self.window.peek_back(2) {
            Some(slot) if slot.token.is_ident() => 2,
            Some(slot) if slot.token.is_whitespace() => 3,
            _ => return,
        };
        let Some(target) = self
            .window
            .peek_back(offset)
            .map(|slot| slot.token)
            .filter(Token::is_ident)
        else {
            return;
        };

        if !self.declare(target.text) {
            return;
        }
        if let Some(short) = self.table.get(target.text) {
            let slot = Slot::patched(target, short.to_owned());
            self.window.replace_back(offset, slot);
        }
    }

    /// Register a short name for `name` if it has none yet. Returns `true`
    /// only when a new mapping was added.
    fn declare(&mut self, name: &str) -> bool {
        if self.table.contains(name) {
            return false;
        }
        match self.names.allocate(&[name]) {
            Some(short) => {
                debug!(original = name, short = %short, "registered short name");
                self.table.register(name, short);
                self.stats.renamed += 1;
                true
            }
            None => {
                debug!(original = name, "no short name left, keeping original");
                self.stats.exhausted += 1;
                false
            }
        }
    }

    fn known_short_name(&self, token: &Token<'src>) -> Option<String> {
        if !token.is_ident() {
            return None;
        }
        self.table.get(token.text).map(str::to_owned)
    }

    fn emit(&mut self, slot: &Slot<'src>) -> Result<(), RewriteError> {
        self.out.write_all(slot.output.as_bytes())?;
        self.stats.tokens_written += 1;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests use expect to panic on unexpected state")]
mod tests;
