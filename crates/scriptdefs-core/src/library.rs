//! Include-file library: file name to raw script bytes.

use indexmap::IndexMap;

/// Include scripts of one game variant, keyed by include name (`k_inc_generic`).
///
/// Keeps insertion order so callers can see what the source handed over;
/// use [`LibraryTable::sorted`] for deterministic output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryTable {
    entries: IndexMap<String, Vec<u8>>,
}

impl LibraryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an include file, returning the previous content.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.entries.insert(name.into(), content.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Entries ordered by file name (byte-wise).
    pub fn sorted(&self) -> Vec<(&str, &[u8])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for LibraryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, content) in iter {
            table.insert(name, content);
        }
        table
    }
}
