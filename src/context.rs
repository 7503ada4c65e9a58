//! Application Context
//!
//! Navigable query state and the list reload trigger, shared via the
//! Leptos Context API.

use leptos::prelude::*;

use crate::route::{self, ListQuery};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current committed list query (filter + page)
    pub query: RwSignal<ListQuery>,
    /// Bumped after cache invalidation so the active list query refetches - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after cache invalidation so the active list query refetches - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(query: ListQuery) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            query: RwSignal::new(query),
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Commit a new filter and push it into the URL; page resets to 1
    pub fn apply_filter(&self, filter: &str) {
        let next = self.query.get_untracked().with_filter(filter);
        route::navigate(&next);
        self.query.set(next);
    }

    /// Commit a debounced filter; page resets to 1. Replaces the current
    /// history entry instead of pushing, so typing leaves no trail
    pub fn apply_filter_replacing(&self, filter: &str) {
        let next = self.query.get_untracked().with_filter(filter);
        route::replace(&next);
        self.query.set(next);
    }

    /// Jump to a page, keeping the committed filter
    pub fn go_to_page(&self, page: u32) {
        let next = self.query.get_untracked().with_page(page);
        route::navigate(&next);
        self.query.set(next);
    }

    /// Re-read filter/page after back/forward navigation
    pub fn sync_from_location(&self) {
        self.query.set(route::current());
    }

    /// Force the active list query to run again
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
