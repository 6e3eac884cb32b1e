//! Identifier shortening over a whitespace-preserving token stream.
//!
//! # Architecture
//!
//! ```text
//! Tokenizer ──► TokenWindow ──► Rewriter ──► io::Write
//!               (lookback +     (detection,
//!                lookahead)      substitution)
//!                                  │    │
//!                          RenameTable  ShortNames
//! ```
//!
//! The [`Rewriter`] owns its [`RenameTable`] and [`ShortNames`]; nothing is
//! global, so separate files get separate engines and one engine can be
//! reused across inputs when names should stay stable.
//!
//! Renaming is purely lexical. Variables introduced by `var name` or
//! `name :=` get a one-character replacement, and from then on every
//! identifier token spelling `name` is replaced, regardless of scope.

mod error;
mod rename_table;
mod rewriter;
mod short_names;
mod token_window;
mod window;

pub use error::RewriteError;
pub use rename_table::RenameTable;
pub use rewriter::{
    RewriteOptions, RewriteStats, Rewriter, DEFAULT_WINDOW, MIN_WINDOW,
};
pub use short_names::{ShortNames, FALLBACK_ALPHABET};
pub use token_window::{Slot, TokenWindow};
pub use window::SlidingWindow;

use gomin_lexer::{SourceBuffer, Tokenizer};

/// Rewrite `source` with a fresh engine and return the output text.
pub fn rewrite_to_string(source: &str, options: RewriteOptions) -> Result<String, RewriteError> {
    let buf = SourceBuffer::new(source);
    let mut rewriter = Rewriter::new(options)?;
    let mut out = Vec::with_capacity(source.len());
    rewriter.rewrite(Tokenizer::new(&buf), &mut out)?;
    // Output is source slices and short names, always valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
