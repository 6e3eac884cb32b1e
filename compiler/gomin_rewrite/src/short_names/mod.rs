//! Short-name allocation.
//!
//! Each run owns one [`ShortNames`] registry. A name, once handed out, is
//! never handed out again, so every renamed variable gets a distinct
//! replacement.

use rustc_hash::FxHashSet;

/// Characters tried after all candidates: `a`..=`z` without `w`.
pub const FALLBACK_ALPHABET: &str = "abcdefghijklmnopqrstuvxyz";

/// Registry of short names already handed out in one run.
#[derive(Clone, Debug, Default)]
pub struct ShortNames {
    taken: FxHashSet<String>,
}

impl ShortNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the first free single-character name drawn from `candidates`.
    ///
    /// Candidates are scanned in order, characters left to right, followed by
    /// [`FALLBACK_ALPHABET`]. Each character is lower-cased before the lookup.
    /// Characters that cannot start an identifier (digits, `_`, symbols) are
    /// skipped so the replacement is always a valid identifier.
    ///
    /// Returns `None` once every eligible character is taken. There is no
    /// multi-character fallback.
    pub fn allocate<S: AsRef<str>>(&mut self, candidates: &[S]) -> Option<String> {
        let name = candidates
            .iter()
            .map(AsRef::as_ref)
            .chain(std::iter::once(FALLBACK_ALPHABET))
            .flat_map(str::chars)
            .filter(|c| c.is_alphabetic())
            .map(|c| c.to_lowercase().collect::<String>())
            .find(|name| !self.taken.contains(name))?;
        self.taken.insert(name.clone());
        Some(name)
    }

    /// Returns `true` if `name` has already been handed out.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Number of names handed out so far.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
