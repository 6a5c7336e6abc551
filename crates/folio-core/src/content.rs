//! Structured page documents.
//!
//! Pages with a backing document keep their copy in `content/<page>.json`,
//! one document per page holding both locales. Shaping (locale selection,
//! fallback, placeholders) happens here; rendering the shaped content is
//! the host's concern.

use serde::Deserialize;

use folio_store::{ContentStore, fetch_json};
use folio_types::Lang;

use crate::page::Page;

/// One titled block of a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// The shaped content of one page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Both locales of a page document as stored.
#[derive(Debug, Deserialize)]
struct PageDocument {
    en: PageContent,
    de: Option<PageContent>,
}

/// Load the content document for `page` in `lang`.
///
/// A missing German half falls back to English. A missing or corrupt
/// document degrades to placeholder copy with a warning; page navigation
/// never fails on content problems.
pub fn load_page_content(store: &dyn ContentStore, page: Page, lang: Lang) -> PageContent {
    let name = format!("content/{}.json", page.name());
    match fetch_json::<PageDocument>(store, &name) {
        Ok(doc) => match lang {
            Lang::En => doc.en,
            Lang::De => doc.de.unwrap_or_else(|| {
                log::debug!("no German content for {}, using English", page.name());
                doc.en
            }),
        },
        Err(err) => {
            log::warn!("failed to load {name}: {err}");
            placeholder_content(lang)
        },
    }
}

/// The copy shown when a page document cannot be loaded.
pub fn placeholder_content(lang: Lang) -> PageContent {
    let text = match lang {
        Lang::En => "This page is under construction. Check back soon.",
        Lang::De => "Diese Seite befindet sich im Aufbau. Schauen Sie bald wieder vorbei.",
    };
    PageContent {
        heading: None,
        sections: vec![Section {
            title: None,
            paragraphs: vec![text.to_string()],
            bullets: Vec::new(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_store::MemoryStore;

    fn store_with_about() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_text(
            "content/about.json",
            r#"{
                "en": {
                    "heading": "About Me",
                    "sections": [
                        {"title": "Background", "paragraphs": ["Engineer."], "bullets": ["Rust"]}
                    ]
                },
                "de": {
                    "heading": "Über mich",
                    "sections": [
                        {"title": "Werdegang", "paragraphs": ["Ingenieur."], "bullets": ["Rust"]}
                    ]
                }
            }"#,
        );
        store
    }

    #[test]
    fn loads_requested_locale() {
        let store = store_with_about();
        let en = load_page_content(&store, Page::About, Lang::En);
        assert_eq!(en.heading.as_deref(), Some("About Me"));
        let de = load_page_content(&store, Page::About, Lang::De);
        assert_eq!(de.heading.as_deref(), Some("Über mich"));
        assert_eq!(de.sections[0].title.as_deref(), Some("Werdegang"));
    }

    #[test]
    fn missing_german_half_falls_back_to_english() {
        let mut store = MemoryStore::new();
        store.insert_text(
            "content/services.json",
            r#"{"en": {"heading": "Services", "sections": []}}"#,
        );
        let de = load_page_content(&store, Page::Services, Lang::De);
        assert_eq!(de.heading.as_deref(), Some("Services"));
    }

    #[test]
    fn missing_document_degrades_to_placeholder() {
        let store = MemoryStore::new();
        let content = load_page_content(&store, Page::Contact, Lang::En);
        assert_eq!(content, placeholder_content(Lang::En));
        assert!(!content.sections[0].paragraphs.is_empty());
    }

    #[test]
    fn corrupt_document_degrades_to_placeholder() {
        let mut store = MemoryStore::new();
        store.insert_text("content/about.json", "not json at all");
        let content = load_page_content(&store, Page::About, Lang::De);
        assert_eq!(content, placeholder_content(Lang::De));
    }

    #[test]
    fn placeholder_is_localized() {
        assert_ne!(
            placeholder_content(Lang::En).sections[0].paragraphs,
            placeholder_content(Lang::De).sections[0].paragraphs
        );
    }
}
