//! In-memory content store.
//!
//! Useful for unit tests and the embedded demo site. The entire document
//! set lives in a `BTreeMap<String, Vec<u8>>` keyed by logical name.

use std::collections::BTreeMap;

use folio_types::error::{FolioError, Result};

use crate::{ContentStore, check_name};

/// A fully in-memory content store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing any existing one with the same name.
    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) {
        self.docs.insert(name.to_string(), bytes);
    }

    /// Insert a text document.
    pub fn insert_text(&mut self, name: &str, text: &str) {
        self.insert(name, text.as_bytes().to_vec());
    }

    /// Names of all stored documents, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }
}

impl ContentStore for MemoryStore {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        check_name(name)?;
        self.docs
            .get(name)
            .cloned()
            .ok_or_else(|| FolioError::Store(format!("no such document: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_inserted_bytes() {
        let mut store = MemoryStore::new();
        store.insert_text("posts/hello.en.md", "# Hello");
        assert_eq!(store.fetch_text("posts/hello.en.md").unwrap(), "# Hello");
    }

    #[test]
    fn fetch_missing_is_error() {
        let store = MemoryStore::new();
        assert!(store.fetch("absent.json").is_err());
    }

    #[test]
    fn insert_replaces() {
        let mut store = MemoryStore::new();
        store.insert_text("a.txt", "one");
        store.insert_text("a.txt", "two");
        assert_eq!(store.fetch_text("a.txt").unwrap(), "two");
    }

    #[test]
    fn names_are_sorted() {
        let mut store = MemoryStore::new();
        store.insert_text("b.txt", "");
        store.insert_text("a.txt", "");
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}
