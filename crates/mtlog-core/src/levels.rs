//! Level table: key → level name

use std::collections::BTreeMap;

/// Mapping from a numeric level key to a level name
///
/// Keys need not be contiguous; the backing map enforces key uniqueness.
/// The default table carries the six built-in levels keyed 0–5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMap {
    entries: BTreeMap<u32, String>,
}

impl Default for LevelMap {
    fn default() -> Self {
        [
            (0, "debug"),
            (1, "log"),
            (2, "info"),
            (3, "warn"),
            (4, "error"),
            (5, "critical"),
        ]
        .into_iter()
        .map(|(k, name)| (k, name.to_string()))
        .collect()
    }
}

impl LevelMap {
    /// Create an empty level table
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the name for a key
    pub fn insert(&mut self, key: u32, name: impl Into<String>) {
        self.entries.insert(key, name.into());
    }

    /// Look up the name for a key
    pub fn name(&self, key: u32) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(k, name)| (*k, name.as_str()))
    }

    /// Number of levels in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no levels
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<u32, String>> for LevelMap {
    fn from(entries: BTreeMap<u32, String>) -> Self {
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for LevelMap {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, name)| (k, name.into())).collect(),
        }
    }
}
