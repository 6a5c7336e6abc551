//! Content store abstraction for termfolio.
//!
//! A [`ContentStore`] maps logical, slash-separated names
//! (`translations/en.json`, `posts/posts.json`, `posts/<id>.<code>.md`,
//! `content/<page>.json`) to raw bytes. How retrieval happens is the store's
//! business; callers treat every error as "not found" and never distinguish
//! transport failure from absence.

mod dir;
mod memory;

use serde::de::DeserializeOwned;

use folio_types::error::{FolioError, Result};

pub use dir::DirStore;
pub use memory::MemoryStore;

/// A read-only source of site content.
pub trait ContentStore {
    /// Fetch the raw bytes for a logical name.
    fn fetch(&self, name: &str) -> Result<Vec<u8>>;

    /// Fetch a document as UTF-8 text (lossy).
    fn fetch_text(&self, name: &str) -> Result<String> {
        let bytes = self.fetch(name)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Fetch a JSON document and decode it in one step.
pub fn fetch_json<T: DeserializeOwned>(store: &dyn ContentStore, name: &str) -> Result<T> {
    let bytes = store.fetch(name)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Validate a logical name: relative, slash-separated, no traversal.
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('/') {
        return Err(FolioError::Store(format!("invalid name: {name:?}")));
    }
    if name.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err(FolioError::Store(format!("invalid name: {name:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_name_accepts_plain_paths() {
        assert!(check_name("posts/posts.json").is_ok());
        assert!(check_name("translations/en.json").is_ok());
        assert!(check_name("top-level.md").is_ok());
    }

    #[test]
    fn check_name_rejects_traversal() {
        assert!(check_name("../etc/passwd").is_err());
        assert!(check_name("posts/../secrets").is_err());
        assert!(check_name("/absolute").is_err());
        assert!(check_name("posts//double").is_err());
        assert!(check_name("").is_err());
        assert!(check_name("./posts").is_err());
    }

    #[test]
    fn fetch_json_decodes() {
        let mut store = MemoryStore::new();
        store.insert("meta.json", br#"{"posts": []}"#.to_vec());
        let value: serde_json::Value = fetch_json(&store, "meta.json").unwrap();
        assert!(value.get("posts").is_some());
    }

    #[test]
    fn fetch_json_propagates_decode_failure() {
        let mut store = MemoryStore::new();
        store.insert("meta.json", b"not json".to_vec());
        let result: Result<serde_json::Value> = fetch_json(&store, "meta.json");
        assert!(result.is_err());
    }
}
