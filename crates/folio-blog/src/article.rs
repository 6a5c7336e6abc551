//! Article document resolution.
//!
//! Articles live as plain markdown files named `posts/<id>.<code>.md`, one
//! per locale. Resolution tries the active locale first, then English.
//! Documents are fetched on demand and dropped when the reading view is
//! left; nothing is cached across navigations.

use folio_store::ContentStore;
use folio_types::Lang;

/// A resolved article: raw markdown plus the locale that satisfied the
/// request (which may differ from the one asked for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDoc {
    pub id: String,
    pub lang: Lang,
    pub markdown: String,
}

/// Resolve an article's markdown for a post id and locale.
///
/// Falls back to the default locale when the requested one has no
/// document. Returns `None` only when neither exists; callers substitute
/// [`placeholder_markdown`] rather than surfacing an error.
pub fn resolve_document(store: &dyn ContentStore, id: &str, lang: Lang) -> Option<ArticleDoc> {
    let mut attempts = vec![lang];
    if lang != Lang::default() {
        attempts.push(Lang::default());
    }
    for attempt in attempts {
        let name = format!("posts/{id}.{}.md", attempt.code());
        match store.fetch_text(&name) {
            Ok(markdown) => {
                if attempt != lang {
                    log::debug!("{id}: no {} document, serving {}", lang.code(), attempt.code());
                }
                return Some(ArticleDoc {
                    id: id.to_string(),
                    lang: attempt,
                    markdown,
                });
            },
            Err(_) => continue,
        }
    }
    None
}

/// Localized stand-in markdown for an article that could not be loaded.
pub fn placeholder_markdown(lang: Lang) -> String {
    match lang {
        Lang::De => "# Artikel nicht verfügbar\n\nEntschuldigung, dieser Artikel konnte nicht \
                     geladen werden. Bitte versuchen Sie es später erneut."
            .to_string(),
        Lang::En => "# Article Unavailable\n\nSorry, this article could not be loaded. Please \
                     try again later."
            .to_string(),
    }
}
