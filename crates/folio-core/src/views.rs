//! View activation flags.
//!
//! Each registered view is either active or inactive. Applying a snapshot
//! deactivates everything and activates the snapshot's page, so after any
//! apply exactly one view is active.

use std::collections::BTreeMap;

use crate::page::Page;
use crate::state::Snapshot;

#[derive(Debug)]
pub struct ViewSet {
    flags: BTreeMap<Page, bool>,
}

impl ViewSet {
    /// All views inactive except `initial`.
    pub fn new(initial: Page) -> ViewSet {
        let mut set = ViewSet {
            flags: Page::ALL.iter().map(|&p| (p, false)).collect(),
        };
        set.flags.insert(initial, true);
        set
    }

    /// Activate the snapshot's page, deactivating every other view.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        for flag in self.flags.values_mut() {
            *flag = false;
        }
        self.flags.insert(snapshot.page, true);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.flags.get(&page).copied().unwrap_or(false)
    }

    /// The single active view.
    pub fn active(&self) -> Page {
        self.flags
            .iter()
            .find(|&(_, &active)| active)
            .map(|(&page, _)| page)
            .unwrap_or(Page::Home)
    }

    fn active_count(&self) -> usize {
        self.flags.values().filter(|&&a| a).count()
    }

    /// Invariant check used by tests.
    pub fn exactly_one_active(&self) -> bool {
        self.active_count() == 1
    }
}
