//! Embedded demo site.
//!
//! Used when no content directory is given, so the binary runs out of the
//! box. The documents mirror the layout a real site directory would have:
//! `translations/`, `content/`, and `posts/`.

use folio_store::MemoryStore;

/// Build the demo content store.
pub fn demo_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    store.insert_text(
        "translations/en.json",
        r#"{
  "nav": {
    "home": "[ home ]",
    "about": "[ about ]",
    "blog": "[ blog ]",
    "contact": "[ contact ]"
  },
  "blog": {
    "no_posts": "No posts yet. Check back soon."
  },
  "terminal": {
    "welcome": "Welcome to termfolio.",
    "help_prompt": "Type 'help' to see available commands.",
    "navigating_to": "Navigating to",
    "command_not_found": "command not found",
    "did_you_mean": "Did you mean:",
    "theme_switched": "Theme switched to",
    "lang_switched": "Language switched to",
    "social_links": "github.com/example\nmastodon.social/@example",
    "whoami": "guest @ termfolio"
  }
}"#,
    );

    // Deliberately missing blog.no_posts so the fallback path gets real use.
    store.insert_text(
        "translations/de.json",
        r#"{
  "nav": {
    "home": "[ startseite ]",
    "about": "[ ueber mich ]",
    "blog": "[ blog ]",
    "contact": "[ kontakt ]"
  },
  "terminal": {
    "welcome": "Willkommen bei termfolio.",
    "help_prompt": "Geben Sie 'help' ein, um die Befehle zu sehen.",
    "navigating_to": "Wechsle zu",
    "command_not_found": "Befehl nicht gefunden",
    "did_you_mean": "Meinten Sie:",
    "theme_switched": "Design gewechselt zu",
    "lang_switched": "Sprache gewechselt zu",
    "whoami": "gast @ termfolio"
  }
}"#,
    );

    store.insert_text(
        "content/about.json",
        r#"{
  "en": {
    "heading": "About",
    "sections": [
      {
        "title": "Who",
        "paragraphs": ["Software engineer with a weakness for terminals."],
        "bullets": ["systems programming", "web backends"]
      }
    ]
  },
  "de": {
    "heading": "Über mich",
    "sections": [
      {
        "title": "Wer",
        "paragraphs": ["Softwareentwickler mit einer Schwäche für Terminals."],
        "bullets": ["Systemprogrammierung", "Web-Backends"]
      }
    ]
  }
}"#,
    );

    store.insert_text(
        "content/experience.json",
        r#"{
  "en": {
    "heading": "Experience",
    "sections": [
      {
        "title": "2021 - present",
        "paragraphs": ["Backend engineer, infrastructure team."]
      },
      {
        "title": "2018 - 2021",
        "paragraphs": ["Full-stack developer at a small agency."]
      }
    ]
  }
}"#,
    );

    store.insert_text(
        "content/projects.json",
        r#"{
  "en": {
    "heading": "Projects",
    "sections": [
      {
        "paragraphs": ["A few things built in the open:"],
        "bullets": ["termfolio - this site", "a toy database", "dotfiles"]
      }
    ]
  }
}"#,
    );

    store.insert_text(
        "content/services.json",
        r#"{
  "en": {
    "heading": "Services",
    "sections": [
      {
        "paragraphs": ["Available for contract work."],
        "bullets": ["backend development", "code review", "performance work"]
      }
    ]
  }
}"#,
    );

    store.insert_text(
        "content/contact.json",
        r#"{
  "en": {
    "heading": "Contact",
    "sections": [
      {"paragraphs": ["mail@example.com"], "bullets": []}
    ]
  },
  "de": {
    "heading": "Kontakt",
    "sections": [
      {"paragraphs": ["mail@example.com"], "bullets": []}
    ]
  }
}"#,
    );

    store.insert_text(
        "posts/posts.json",
        r#"{
  "posts": [
    {
      "id": "hello-world",
      "published": true,
      "publishedDate": "2024-03-05",
      "title": {"en": "Hello, World", "de": "Hallo, Welt"},
      "excerpt": {
        "en": "Why this site is a terminal.",
        "de": "Warum diese Seite ein Terminal ist."
      },
      "tags": ["meta"],
      "readingTime": 3
    },
    {
      "id": "rust-notes",
      "published": true,
      "publishedDate": "2024-06-12",
      "title": {"en": "Notes on Rust"},
      "excerpt": {"en": "Ownership finally clicked. Some notes."},
      "tags": ["rust"]
    },
    {
      "id": "draft-post",
      "published": false,
      "publishedDate": "2024-07-01",
      "title": {"en": "Unfinished Thoughts"},
      "excerpt": {"en": "Not ready yet."}
    }
  ]
}"#,
    );

    store.insert_text(
        "posts/hello-world.en.md",
        "# Hello, World\n\nThis site is a terminal because I spend my days in one.\n\n\
         - no build step\n- no framework\n- just text\n\nMore soon.",
    );
    store.insert_text(
        "posts/hello-world.de.md",
        "# Hallo, Welt\n\nDiese Seite ist ein Terminal, weil ich meine Tage in einem verbringe.\n\n\
         - kein Build-Schritt\n- kein Framework\n- nur Text\n\nBald mehr.",
    );
    // rust-notes has no German document; the reading view falls back.
    store.insert_text(
        "posts/rust-notes.en.md",
        "# Notes on Rust\n\nOwnership finally clicked after writing a `Vec`-backed arena.\n\n\
         ```\nlet mut arena = Arena::new();\nlet id = arena.alloc(Node::leaf());\n```\n\n\
         The borrow checker is a *guide*, not an obstacle. See \
         [the book](https://doc.rust-lang.org/book/) for the long version.",
    );
    store.insert_text(
        "posts/draft-post.en.md",
        "# Unfinished Thoughts\n\nStill being written.",
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_blog::PostIndex;
    use folio_i18n::Translations;
    use folio_store::ContentStore;
    use folio_types::Lang;

    #[test]
    fn demo_translations_parse() {
        let store = demo_store();
        let i18n = Translations::load(&store);
        assert_eq!(i18n.resolve(Lang::En, "terminal.welcome"), "Welcome to termfolio.");
        // de table is missing blog.no_posts; must fall back to en.
        assert_eq!(
            i18n.resolve(Lang::De, "blog.no_posts"),
            "No posts yet. Check back soon."
        );
    }

    #[test]
    fn demo_post_index_lists_published_newest_first() {
        let store = demo_store();
        let index = PostIndex::load(&store);
        let listed = index.published();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "rust-notes");
        assert_eq!(listed[1].id, "hello-world");
    }

    #[test]
    fn every_listed_post_has_an_english_document() {
        let store = demo_store();
        let index = PostIndex::load(&store);
        for post in index.published() {
            let name = format!("posts/{}.en.md", post.id);
            assert!(store.fetch(&name).is_ok(), "missing {name}");
        }
    }
}
