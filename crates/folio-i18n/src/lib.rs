//! Translation tables and dotted-key resolution.
//!
//! One JSON document per locale (`translations/<code>.json`), each a nested
//! tree of string keys to strings or further objects. Lookup walks the
//! active locale's tree; any miss retries the full path against the default
//! locale; a miss there returns the key itself. Degradation is visible but
//! harmless; nothing here ever fails outright.

use std::collections::HashMap;

use serde_json::Value;

use folio_store::ContentStore;
use folio_types::Lang;

/// The loaded locale tables.
///
/// Invariant: after [`Translations::load`] a table exists for every `Lang`
/// variant, even if it is empty, so `resolve` always has somewhere to look.
#[derive(Debug)]
pub struct Translations {
    tables: HashMap<Lang, Value>,
}

impl Translations {
    /// Load every supported locale from the store.
    ///
    /// A missing or malformed document is non-fatal: that locale gets an
    /// empty table and lookups degrade to the fallback path.
    pub fn load(store: &dyn ContentStore) -> Translations {
        let mut tables = HashMap::new();
        for &lang in Lang::ALL {
            let name = format!("translations/{}.json", lang.code());
            let table = match store.fetch(&name) {
                Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                    Ok(value @ Value::Object(_)) => value,
                    Ok(_) => {
                        log::warn!("{name}: not a JSON object, using empty table");
                        empty_table()
                    },
                    Err(e) => {
                        log::warn!("{name}: {e}, using empty table");
                        empty_table()
                    },
                },
                Err(e) => {
                    log::warn!("{name}: {e}, using empty table");
                    empty_table()
                },
            };
            tables.insert(lang, table);
        }
        Translations { tables }
    }

    /// Build directly from per-locale JSON values. Test seam.
    pub fn from_tables(entries: impl IntoIterator<Item = (Lang, Value)>) -> Translations {
        let mut tables: HashMap<Lang, Value> = entries.into_iter().collect();
        for &lang in Lang::ALL {
            tables.entry(lang).or_insert_with(empty_table);
        }
        Translations { tables }
    }

    /// Resolve a dotted key against the given locale.
    ///
    /// Walks `key` segment by segment through the locale's tree. On any
    /// miss the full path is retried against the default locale; if that
    /// walk also fails the key itself is returned verbatim.
    pub fn resolve(&self, lang: Lang, key: &str) -> String {
        if let Some(text) = self.walk(lang, key) {
            return text.to_string();
        }
        if lang != Lang::default()
            && let Some(text) = self.walk(Lang::default(), key)
        {
            return text.to_string();
        }
        key.to_string()
    }

    fn walk(&self, lang: Lang, key: &str) -> Option<&str> {
        let mut node = self.tables.get(&lang)?;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }
}

fn empty_table() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_store::MemoryStore;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample() -> Translations {
        Translations::from_tables([
            (
                Lang::En,
                json!({
                    "nav": { "home": "[ home ]", "contact": "[ contact ]" },
                    "terminal": { "welcome": "Welcome!" }
                }),
            ),
            (
                Lang::De,
                json!({
                    "nav": { "home": "[ startseite ]" }
                }),
            ),
        ])
    }

    #[test]
    fn resolves_in_active_locale() {
        let t = sample();
        assert_eq!(t.resolve(Lang::De, "nav.home"), "[ startseite ]");
        assert_eq!(t.resolve(Lang::En, "nav.home"), "[ home ]");
    }

    #[test]
    fn missing_key_falls_back_to_default_locale() {
        let t = sample();
        // "de" has no nav.contact; "en" does.
        assert_eq!(t.resolve(Lang::De, "nav.contact"), "[ contact ]");
    }

    #[test]
    fn missing_everywhere_returns_key_verbatim() {
        let t = sample();
        assert_eq!(t.resolve(Lang::De, "nav.imprint"), "nav.imprint");
        assert_eq!(t.resolve(Lang::En, "nope"), "nope");
    }

    #[test]
    fn non_leaf_hit_is_a_miss() {
        let t = sample();
        // "nav" resolves to an object, not a string.
        assert_eq!(t.resolve(Lang::En, "nav"), "nav");
    }

    #[test]
    fn load_substitutes_empty_table_for_missing_locale() {
        let mut store = MemoryStore::new();
        store.insert_text(
            "translations/en.json",
            r#"{"nav": {"home": "[ home ]"}}"#,
        );
        // No de.json at all.
        let t = Translations::load(&store);
        assert_eq!(t.resolve(Lang::De, "nav.home"), "[ home ]");
    }

    #[test]
    fn load_substitutes_empty_table_for_corrupt_locale() {
        let mut store = MemoryStore::new();
        store.insert_text("translations/en.json", r#"{"a": "b"}"#);
        store.insert_text("translations/de.json", "{broken");
        let t = Translations::load(&store);
        assert_eq!(t.resolve(Lang::De, "a"), "b");
    }

    proptest! {
        /// Keys absent from both tables always resolve to themselves.
        #[test]
        fn absent_keys_resolve_verbatim(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
            let t = sample();
            prop_assume!(!key.starts_with("nav") && !key.starts_with("terminal"));
            prop_assert_eq!(t.resolve(Lang::De, &key), key.clone());
            prop_assert_eq!(t.resolve(Lang::En, &key), key);
        }
    }
}
