//! Key -> entry lookup over one document.

use std::collections::BTreeMap;

use crate::document::{entry_key, Document};
use crate::node::Element;

/// An id-keyed lookup over a document's top-level entries.
///
/// Built in one pass; the first occurrence of a duplicate key wins and
/// duplicates are not fatal. Keys follow [`entry_key`]: `guid` when present,
/// else `id`. Entries with neither are skipped.
pub struct EntryIndex<'a> {
    by_key: BTreeMap<&'a str, &'a Element>,
    order: Vec<&'a str>,
}

impl<'a> EntryIndex<'a> {
    /// Build the index over a document's entries.
    pub fn build(document: &'a Document) -> Self {
        let mut by_key = BTreeMap::new();
        let mut order = Vec::new();
        for entry in document.entries() {
            let Some(key) = entry_key(entry) else {
                tracing::warn!("skipping entry without id or guid");
                continue;
            };
            if by_key.contains_key(key) {
                tracing::warn!(key, "duplicate entry key; first occurrence wins");
                continue;
            }
            by_key.insert(key, entry);
            order.push(key);
        }
        Self { by_key, order }
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&'a Element> {
        self.by_key.get(key).copied()
    }

    /// Returns `true` if an entry with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Indexed keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the document has no indexed entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_order() {
        let doc = Document::parse(
            "<lift><entry id='b'/><entry id='a'/><entry id='c'/></lift>",
        )
        .unwrap();
        let index = EntryIndex::build(&doc);
        assert_eq!(index.len(), 3);
        assert_eq!(index.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(index.get("a").unwrap().attribute("id"), Some("a"));
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let doc = Document::parse(
            "<lift><entry id='one' greeting='first'/><entry id='one' greeting='second'/></lift>",
        )
        .unwrap();
        let index = EntryIndex::build(&doc);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("one").unwrap().attribute("greeting"), Some("first"));
    }

    #[test]
    fn guid_is_the_lookup_key_when_present() {
        let doc = Document::parse("<lift><entry id='one' guid='g-1'/></lift>").unwrap();
        let index = EntryIndex::build(&doc);
        assert!(index.contains("g-1"));
        assert!(!index.contains("one"));
    }

    #[test]
    fn keyless_entries_are_skipped() {
        let doc = Document::parse("<lift><entry/><entry id='a'/></lift>").unwrap();
        let index = EntryIndex::build(&doc);
        assert_eq!(index.len(), 1);
    }
}
