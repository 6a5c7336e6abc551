//! Shareable location fragment codec.
//!
//! The fragment encodes either a bare page identifier or `post/<id>` for a
//! direct article link. Home encodes as the empty fragment (the original
//! clears the hash on home), and an empty fragment parses back to home.

use crate::page::Page;

/// A decoded location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(Page),
    Post(String),
}

impl Route {
    /// Parse a fragment. Unknown page names yield `None`, which callers
    /// treat as a no-op.
    pub fn parse(fragment: &str) -> Option<Route> {
        let frag = fragment.strip_prefix('#').unwrap_or(fragment);
        if frag.is_empty() {
            return Some(Route::Page(Page::Home));
        }
        if let Some(id) = frag.strip_prefix("post/") {
            if id.is_empty() {
                return None;
            }
            return Some(Route::Post(id.to_string()));
        }
        Page::from_name(frag).map(Route::Page)
    }

    /// Encode back into a fragment string.
    pub fn encode(&self) -> String {
        match self {
            Route::Page(Page::Home) => String::new(),
            Route::Page(page) => page.name().to_string(),
            Route::Post(id) => format!("post/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(Route::parse(""), Some(Route::Page(Page::Home)));
        assert_eq!(Route::parse("#"), Some(Route::Page(Page::Home)));
    }

    #[test]
    fn page_fragments_parse() {
        assert_eq!(Route::parse("about"), Some(Route::Page(Page::About)));
        assert_eq!(Route::parse("#blog"), Some(Route::Page(Page::Blog)));
    }

    #[test]
    fn post_fragments_parse() {
        assert_eq!(
            Route::parse("post/first-post"),
            Some(Route::Post("first-post".into()))
        );
    }

    #[test]
    fn unknown_or_degenerate_fragments_are_none() {
        assert_eq!(Route::parse("imprint"), None);
        assert_eq!(Route::parse("post/"), None);
    }

    #[test]
    fn home_encodes_to_empty() {
        assert_eq!(Route::Page(Page::Home).encode(), "");
    }

    #[test]
    fn pages_round_trip() {
        for &page in Page::ALL {
            let route = Route::Page(page);
            assert_eq!(Route::parse(&route.encode()), Some(route));
        }
    }

    proptest! {
        #[test]
        fn post_ids_round_trip(id in "[a-z0-9-]{1,24}") {
            let route = Route::Post(id);
            prop_assert_eq!(Route::parse(&route.encode()), Some(route));
        }
    }
}
