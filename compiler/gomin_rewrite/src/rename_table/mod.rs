//! Original identifier -> short name mapping.

use rustc_hash::FxHashMap;

/// Insert-once map from original identifiers to their short names.
///
/// Keys are exact, case-sensitive identifier spellings. There is no
/// scoping: one table covers the whole file, so every occurrence of a
/// registered spelling is renamed, wherever it appears.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameTable {
    map: FxHashMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Short name registered for `original`, if any.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.map.get(original).map(String::as_str)
    }

    pub fn contains(&self, original: &str) -> bool {
        self.map.contains_key(original)
    }

    /// Register `original -> short`.
    ///
    /// A mapping is immutable once present: registering an existing
    /// original returns `false` and keeps the first value.
    pub fn register(&mut self, original: &str, short: String) -> bool {
        if self.map.contains_key(original) {
            return false;
        }
        self.map.insert(original.to_owned(), short);
        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All mappings, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All mappings, sorted by original name.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
    }
}
