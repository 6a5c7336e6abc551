//! Immutable application snapshots and the event reducer.
//!
//! All mutation flows through [`reduce`]: it takes the current snapshot
//! and one event and returns a new snapshot, the views that need
//! re-rendering, and the effects for the host to run. The reducer itself
//! never touches a store, the terminal, or the clock.

use folio_types::{Lang, Prefs, Theme};

use crate::page::Page;
use crate::route::Route;

/// One immutable application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub page: Page,
    pub lang: Lang,
    pub theme: Theme,
    /// The article shown in the reading view. Dropped on leaving it;
    /// article documents are not cached across navigations.
    pub post_id: Option<String>,
    /// Bumped on every navigation and language change. Content loads
    /// carry it so late responses for superseded states can be dropped.
    pub generation: u64,
}

impl Snapshot {
    pub fn new(prefs: Prefs) -> Snapshot {
        Snapshot {
            page: Page::Home,
            lang: prefs.lang,
            theme: prefs.theme,
            post_id: None,
            generation: 0,
        }
    }

    fn prefs(&self) -> Prefs {
        Prefs {
            lang: self.lang,
            theme: self.theme,
        }
    }
}

/// A discrete interaction or completion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Navigation requested from within the app (click or command).
    Navigate(Page),
    /// The shareable fragment changed out-of-band (back/forward, direct
    /// link).
    FragmentChanged(String),
    /// An article was selected from the blog list.
    OpenPost(String),
    ToggleTheme,
    ToggleLang,
    /// A content load finished. `generation` is the value the load was
    /// issued with; a mismatch means the user has moved on.
    ContentReady { view: Page, generation: u64 },
}

/// Work for the host: everything with a side effect lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Reflect the new state into the shareable location fragment.
    SetFragment(String),
    LoadPage { page: Page, generation: u64 },
    LoadArticle {
        id: String,
        lang: Lang,
        generation: u64,
    },
    PersistPrefs(Prefs),
}

/// The result of folding one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub state: Snapshot,
    /// Views whose content must be re-rendered. View activation itself is
    /// derived from the snapshot via `ViewSet::apply`.
    pub dirty: Vec<Page>,
    pub effects: Vec<Effect>,
}

impl Update {
    fn unchanged(state: &Snapshot) -> Update {
        Update {
            state: state.clone(),
            dirty: Vec::new(),
            effects: Vec::new(),
        }
    }
}

/// Fold one event into a new state.
pub fn reduce(state: &Snapshot, event: Event) -> Update {
    match event {
        Event::Navigate(page) => navigate(state, page, true),
        Event::FragmentChanged(fragment) => match Route::parse(&fragment) {
            // The fragment is already what the user sees; don't echo it
            // back as an effect.
            Some(Route::Page(page)) => navigate(state, page, false),
            Some(Route::Post(id)) => open_post(state, id, false),
            None => {
                log::debug!("ignoring unknown fragment: {fragment}");
                Update::unchanged(state)
            },
        },
        Event::OpenPost(id) => open_post(state, id, true),
        Event::ToggleTheme => {
            let mut next = state.clone();
            next.theme = state.theme.toggled();
            let prefs = next.prefs();
            Update {
                state: next,
                dirty: Vec::new(),
                effects: vec![Effect::PersistPrefs(prefs)],
            }
        },
        Event::ToggleLang => {
            let mut next = state.clone();
            next.lang = state.lang.toggled();
            next.generation = state.generation + 1;
            let mut effects = vec![Effect::PersistPrefs(next.prefs())];
            // Reload whatever is on screen in the new language.
            effects.extend(content_load(&next));
            Update {
                dirty: vec![next.page],
                effects,
                state: next,
            }
        },
        Event::ContentReady { view, generation } => {
            if generation != state.generation || view != state.page {
                log::debug!(
                    "dropping stale content for {} (generation {generation})",
                    view.name()
                );
                return Update::unchanged(state);
            }
            Update {
                state: state.clone(),
                dirty: vec![view],
                effects: Vec::new(),
            }
        },
    }
}

fn navigate(state: &Snapshot, page: Page, set_fragment: bool) -> Update {
    let mut next = state.clone();
    next.page = page;
    next.generation = state.generation + 1;
    if page != Page::Reading {
        next.post_id = None;
    }
    let mut effects = Vec::new();
    if set_fragment {
        effects.push(Effect::SetFragment(Route::Page(page).encode()));
    }
    effects.extend(content_load(&next));
    Update {
        dirty: vec![page],
        effects,
        state: next,
    }
}

fn open_post(state: &Snapshot, id: String, set_fragment: bool) -> Update {
    let mut next = state.clone();
    next.page = Page::Reading;
    next.post_id = Some(id.clone());
    next.generation = state.generation + 1;
    let mut effects = Vec::new();
    if set_fragment {
        effects.push(Effect::SetFragment(Route::Post(id.clone()).encode()));
    }
    effects.push(Effect::LoadArticle {
        id,
        lang: next.lang,
        generation: next.generation,
    });
    Update {
        dirty: vec![Page::Reading],
        effects,
        state: next,
    }
}

/// The content-load effect (if any) for the snapshot's current page.
fn content_load(state: &Snapshot) -> Option<Effect> {
    if state.page.has_content_document() || state.page == Page::Blog {
        return Some(Effect::LoadPage {
            page: state.page,
            generation: state.generation,
        });
    }
    if state.page == Page::Reading
        && let Some(id) = &state.post_id
    {
        return Some(Effect::LoadArticle {
            id: id.clone(),
            lang: state.lang,
            generation: state.generation,
        });
    }
    None
}
