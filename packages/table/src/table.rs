//! The ordered, immutable key to fragment table.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fragment::PathFragment;

/// One declared section: a symbolic key and where its content is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub fragment: PathFragment,
}

impl Entry {
    /// Build an entry, validating the fragment but not the key.
    pub fn new(key: impl Into<String>, fragment: &str) -> Result<Self> {
        let key = key.into();
        let fragment =
            PathFragment::parse(fragment).map_err(|e| Error::InvalidFragment {
                key: key.clone(),
                fragment: fragment.to_string(),
                message: e.to_string(),
            })?;
        Ok(Entry { key, fragment })
    }

    pub fn is_directory(&self) -> bool {
        self.fragment.is_directory()
    }
}

/// How a lookup treats a key the table does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// An unknown key is an [`Error::UnknownKey`].
    #[default]
    Strict,
    /// An unknown key is skipped: the lookup yields `Ok(None)`.
    Permissive,
}

/// Immutable mapping from section key to path fragment.
///
/// Entries keep their declaration order, which callers rely on to process
/// sections in document order. Lookups go through a hash index and are O(1)
/// on average. There are no mutators: once built, a table can be shared
/// across threads as-is.
///
/// # Example
///
/// ```rust
/// use xmlsplit_table::PathTable;
///
/// let table = PathTable::from_pairs([("REGION", "region/"), ("grid_data", "grid_data")]).unwrap();
///
/// assert_eq!(table.resolve("REGION").unwrap(), "region/");
/// assert!(table.resolve("REGION").unwrap().is_directory());
/// assert!(table.resolve("missing").is_err());
/// assert_eq!(table.all_keys().collect::<Vec<_>>(), vec!["REGION", "grid_data"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Entry>", into = "Vec<Entry>")]
pub struct PathTable {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl PathTable {
    /// Build a table from `(key, fragment)` pairs in declaration order.
    ///
    /// Fails on the first empty key, invalid fragment or repeated key.
    pub fn from_pairs<I, K, F>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, fragment)| Entry::new(key, fragment.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Build a table from already-parsed entries.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.key.is_empty() {
                return Err(Error::EmptyKey { position });
            }
            if let Some(&first) = index.get(&entry.key) {
                return Err(Error::DuplicateKey {
                    key: entry.key.clone(),
                    first,
                    position,
                });
            }
            index.insert(entry.key.clone(), position);
        }

        log::debug!("Built path table with {} entries", entries.len());
        Ok(PathTable { entries, index })
    }

    /// The configured fragment for `key`.
    pub fn resolve(&self, key: &str) -> Result<&PathFragment> {
        self.get(key)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))
    }

    /// Like [`resolve`](Self::resolve), but without an error for absent keys.
    pub fn get(&self, key: &str) -> Option<&PathFragment> {
        self.index.get(key).map(|&i| &self.entries[i].fragment)
    }

    /// Resolve `key` under the caller's policy for unknown keys.
    ///
    /// Used by splitters that treat some sections as optional.
    pub fn lookup(&self, key: &str, strictness: Strictness) -> Result<Option<&PathFragment>> {
        match (self.get(key), strictness) {
            (Some(fragment), _) => Ok(Some(fragment)),
            (None, Strictness::Strict) => Err(Error::UnknownKey(key.to_string())),
            (None, Strictness::Permissive) => {
                log::debug!("Skipping unknown section key '{}'", key);
                Ok(None)
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every key, in declaration order.
    ///
    /// Each call starts a fresh pass over the table.
    pub fn all_keys(&self) -> Keys<'_> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Every entry, in declaration order.
    pub fn entries(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Keys whose fragment expands to a directory, in declaration order.
    pub fn directory_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.is_directory())
            .map(|e| e.key.as_str())
    }

    /// Keys whose fragment names a single file, in declaration order.
    pub fn file_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.is_directory())
            .map(|e| e.key.as_str())
    }

    /// Reverse lookup: the key that declared `fragment`.
    ///
    /// When several keys share a fragment, the first declared one wins.
    pub fn key_for_fragment(&self, fragment: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.fragment == fragment)
            .map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<Entry>> for PathTable {
    type Error = Error;

    fn try_from(entries: Vec<Entry>) -> Result<Self> {
        PathTable::from_entries(entries)
    }
}

impl From<PathTable> for Vec<Entry> {
    fn from(table: PathTable) -> Vec<Entry> {
        table.entries
    }
}

impl<'a> IntoIterator for &'a PathTable {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Iterator over table keys in declaration order. See [`PathTable::all_keys`].
#[derive(Clone, Debug)]
pub struct Keys<'a> {
    inner: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| e.key.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| e.key.as_str())
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> PathTable {
        PathTable::from_pairs([
            ("CAI_WORLD_UNITS", "cai_units/unit"),
            ("REGION", "region/"),
            ("grid_data", "grid_data"),
            ("FACTION", "factions/"),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_returns_declared_fragment() {
        let pairs = [
            ("CAI_WORLD_UNITS", "cai_units/unit"),
            ("REGION", "region/"),
            ("grid_data", "grid_data"),
            ("FACTION", "factions/"),
        ];
        let table = sample();
        for (key, fragment) in pairs {
            assert_eq!(table.resolve(key).unwrap(), fragment);
        }
    }

    #[test]
    fn resolve_unknown_key() {
        let table = sample();
        for key in ["missing", "", "region", "REGION/"] {
            match table.resolve(key) {
                Err(Error::UnknownKey(k)) => assert_eq!(k, key),
                other => panic!("expected UnknownKey, got {:?}", other),
            }
        }
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = PathTable::from_pairs([
            ("REGION", "region/"),
            ("grid_data", "grid_data"),
            ("REGION", "regions/"),
        ])
        .unwrap_err();

        match err {
            Error::DuplicateKey {
                key,
                first,
                position,
            } => {
                assert_eq!(key, "REGION");
                assert_eq!(first, 0);
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = PathTable::from_pairs([("REGION", "region/"), ("", "nowhere")]).unwrap_err();
        assert!(matches!(err, Error::EmptyKey { position: 1 }));
    }

    #[test]
    fn invalid_fragment_is_rejected() {
        let err = PathTable::from_pairs([("FAMILY", "/family/")]).unwrap_err();
        match err {
            Error::InvalidFragment { key, fragment, .. } => {
                assert_eq!(key, "FAMILY");
                assert_eq!(fragment, "/family/");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn all_keys_in_declaration_order() {
        let table = sample();
        let keys: Vec<&str> = table.all_keys().collect();
        assert_eq!(keys, vec!["CAI_WORLD_UNITS", "REGION", "grid_data", "FACTION"]);

        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn all_keys_is_restartable() {
        let table = sample();
        let mut first = table.all_keys();
        assert_eq!(first.next(), Some("CAI_WORLD_UNITS"));
        assert_eq!(first.len(), 3);

        let second: Vec<&str> = table.all_keys().collect();
        assert_eq!(second.len(), 4);
        assert_eq!(table.all_keys().rev().next(), Some("FACTION"));
    }

    #[test]
    fn lookup_strict_and_permissive() {
        let table = sample();
        assert_eq!(
            table.lookup("REGION", Strictness::Strict).unwrap().unwrap(),
            "region/"
        );
        assert_eq!(
            table.lookup("REGION", Strictness::Permissive).unwrap().unwrap(),
            "region/"
        );
        assert!(matches!(
            table.lookup("missing", Strictness::Strict),
            Err(Error::UnknownKey(_))
        ));
        assert!(table.lookup("missing", Strictness::Permissive).unwrap().is_none());
        assert_eq!(Strictness::default(), Strictness::Strict);
    }

    #[test]
    fn directory_and_file_keys() {
        let table = sample();
        assert_eq!(
            table.directory_keys().collect::<Vec<_>>(),
            vec!["REGION", "FACTION"]
        );
        assert_eq!(
            table.file_keys().collect::<Vec<_>>(),
            vec!["CAI_WORLD_UNITS", "grid_data"]
        );
    }

    #[test]
    fn reverse_lookup() {
        let table = sample();
        assert_eq!(table.key_for_fragment("factions/"), Some("FACTION"));
        assert_eq!(table.key_for_fragment("factions"), None);

        let shared = PathTable::from_pairs([("A", "shared/"), ("B", "shared/")]).unwrap();
        assert_eq!(shared.key_for_fragment("shared/"), Some("A"));
    }

    #[test]
    fn len_contains_and_iteration() {
        let table = sample();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert!(table.contains_key("grid_data"));
        assert!(!table.contains_key("GRID_DATA"));

        let keys: Vec<&str> = (&table).into_iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, table.all_keys().collect::<Vec<_>>());

        let empty = PathTable::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.all_keys().next(), None);
    }

    #[test]
    fn table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PathTable>();

        let table = std::sync::Arc::new(sample());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = table.clone();
                std::thread::spawn(move || table.resolve("REGION").unwrap().to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "region/");
        }
    }
}
