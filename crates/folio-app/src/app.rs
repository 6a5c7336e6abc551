//! The application host.
//!
//! Wires the interpreter, the reducer, and the content store together.
//! Terminal input becomes actions, actions become events, and effects are
//! executed here: content loads against the store (synchronously in this
//! host, completing as `ContentReady` events), preference writes, and the
//! simulated shareable fragment.

use std::collections::VecDeque;
use std::path::PathBuf;

use folio_blog::{PostIndex, placeholder_markdown, resolve_document};
use folio_core::{
    Effect, Event, Page, Snapshot, ViewSet, load_page_content, reduce,
};
use folio_i18n::Translations;
use folio_store::ContentStore;
use folio_terminal::{Action, Context, Interpreter, OutputCategory, Sink, SystemClock};
use folio_types::Prefs;

use crate::render;

pub struct App {
    store: Box<dyn ContentStore>,
    i18n: Translations,
    posts: PostIndex,
    state: Snapshot,
    views: ViewSet,
    interpreter: Interpreter,
    clock: SystemClock,
    /// Stand-in for the browser location fragment.
    fragment: String,
    prefs_path: PathBuf,
}

impl App {
    pub fn new(store: Box<dyn ContentStore>, prefs_path: PathBuf) -> App {
        let prefs = Prefs::load(&prefs_path);
        let i18n = Translations::load(store.as_ref());
        let posts = PostIndex::load(store.as_ref());
        let state = Snapshot::new(prefs);
        let views = ViewSet::new(state.page);
        App {
            store,
            i18n,
            posts,
            state,
            views,
            interpreter: Interpreter::new(),
            clock: SystemClock,
            fragment: String::new(),
            prefs_path,
        }
    }

    /// The current shareable fragment.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn state(&self) -> &Snapshot {
        &self.state
    }

    /// View activation flags, kept in lockstep with the snapshot.
    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// Route to the starting fragment and show the welcome view.
    pub fn start(&mut self, fragment: &str, sink: &mut dyn Sink) {
        for line in render::home_lines(&self.i18n, self.state.lang) {
            sink.emit(&line, OutputCategory::Info);
        }
        if !fragment.is_empty() {
            self.fragment = fragment.to_string();
            self.apply(Event::FragmentChanged(fragment.to_string()), sink);
        }
    }

    /// Feed one terminal line through the interpreter.
    pub fn handle_line(&mut self, line: &str, sink: &mut dyn Sink) {
        let ctx = Context {
            page: self.state.page,
            lang: self.state.lang,
            theme: self.state.theme,
            i18n: &self.i18n,
            clock: &self.clock,
        };
        let actions = self.interpreter.submit(line, &ctx, sink);
        for action in actions {
            match action {
                Action::Navigate(page) => self.apply(Event::Navigate(page), sink),
                Action::ToggleTheme => self.apply(Event::ToggleTheme, sink),
                Action::ToggleLang => self.apply(Event::ToggleLang, sink),
                Action::ClearScreen => print!("\x1b[2J\x1b[H"),
            }
        }
    }

    /// Fold an event and execute the resulting effects.
    ///
    /// Loads complete synchronously here, so each one immediately queues
    /// its `ContentReady`; the reducer still applies its staleness check.
    pub fn apply(&mut self, event: Event, sink: &mut dyn Sink) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let update = reduce(&self.state, event);
            self.state = update.state;
            self.views.apply(&self.state);

            let mut loading = Vec::new();
            for effect in update.effects {
                match effect {
                    Effect::SetFragment(fragment) => {
                        log::debug!("fragment -> {fragment:?}");
                        self.fragment = fragment;
                    },
                    Effect::LoadPage { page, generation } => {
                        loading.push(page);
                        queue.push_back(Event::ContentReady {
                            view: page,
                            generation,
                        });
                    },
                    Effect::LoadArticle { generation, .. } => {
                        loading.push(Page::Reading);
                        queue.push_back(Event::ContentReady {
                            view: Page::Reading,
                            generation,
                        });
                    },
                    Effect::PersistPrefs(prefs) => {
                        if let Err(e) = prefs.save(&self.prefs_path) {
                            log::warn!("could not save preferences: {e}");
                        }
                    },
                }
            }

            // Views with a load in flight render when the content arrives.
            for page in update.dirty {
                if !loading.contains(&page) {
                    self.render(page, sink);
                }
            }
        }
    }

    fn render(&self, page: Page, sink: &mut dyn Sink) {
        let lang = self.state.lang;
        let lines = match page {
            Page::Home => render::home_lines(&self.i18n, lang),
            Page::Blog => render::blog_lines(&self.posts, lang, &self.i18n),
            Page::Reading => {
                let markdown = self
                    .state
                    .post_id
                    .as_deref()
                    .and_then(|id| resolve_document(self.store.as_ref(), id, lang))
                    .map(|doc| doc.markdown)
                    .unwrap_or_else(|| placeholder_markdown(lang));
                render::article_lines(&markdown)
            },
            _ => render::page_lines(&load_page_content(self.store.as_ref(), page, lang)),
        };
        for line in lines {
            sink.emit(&line, OutputCategory::Response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_setup::demo_store;
    use folio_types::{Lang, Theme};

    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<String>,
    }

    impl Sink for RecordingSink {
        fn emit(&mut self, text: &str, _category: OutputCategory) {
            self.lines.push(text.to_string());
        }
    }

    fn app(dir: &tempfile::TempDir) -> App {
        App::new(Box::new(demo_store()), dir.path().join("prefs.toml"))
    }

    #[test]
    fn start_shows_welcome_and_routes_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.start("about", &mut sink);
        assert!(sink.lines[0].contains("Welcome"));
        assert_eq!(app.state().page, Page::About);
        assert!(sink.lines.iter().any(|l| l.contains("About")));
    }

    #[test]
    fn navigation_command_renders_the_page_and_sets_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.handle_line("contact", &mut sink);
        assert_eq!(app.state().page, Page::Contact);
        assert_eq!(app.fragment(), "contact");
        assert!(sink.lines.iter().any(|l| l.contains("mail@example.com")));
    }

    #[test]
    fn blog_command_lists_published_posts() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.handle_line("blog", &mut sink);
        let joined = sink.lines.join("\n");
        assert!(joined.contains("rust-notes"));
        assert!(joined.contains("hello-world"));
        assert!(!joined.contains("draft-post"));
    }

    #[test]
    fn post_fragment_renders_the_article() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.start("post/hello-world", &mut sink);
        assert_eq!(app.state().page, Page::Reading);
        let joined = sink.lines.join("\n");
        assert!(joined.contains("<h1>Hello, World</h1>"));
    }

    #[test]
    fn missing_article_renders_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.start("post/ghost", &mut sink);
        let joined = sink.lines.join("\n");
        assert!(joined.contains("Article Unavailable"));
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.toml");
        let mut app = App::new(Box::new(demo_store()), prefs_path.clone());
        let mut sink = RecordingSink::default();
        app.handle_line("theme", &mut sink);
        assert_eq!(app.state().theme, Theme::Light);
        assert_eq!(Prefs::load(&prefs_path).theme, Theme::Light);
    }

    #[test]
    fn lang_toggle_rerenders_in_german() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.handle_line("about", &mut sink);
        sink.lines.clear();
        app.handle_line("lang", &mut sink);
        assert_eq!(app.state().lang, Lang::De);
        assert!(sink.lines.iter().any(|l| l.contains("Über mich")));
    }

    #[test]
    fn exactly_one_view_is_active_after_any_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        for line in ["about", "blog", "nonsense", "lang", "home"] {
            app.handle_line(line, &mut sink);
            assert!(app.views().exactly_one_active());
            assert!(app.views().is_active(app.state().page));
        }
    }

    #[test]
    fn unknown_page_fragment_keeps_current_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let mut sink = RecordingSink::default();
        app.handle_line("about", &mut sink);
        app.apply(Event::FragmentChanged("imprint".into()), &mut sink);
        assert_eq!(app.state().page, Page::About);
    }
}
