//! Tag List Controller
//!
//! Derives a cache key from the committed query, serves fresh cache hits
//! without a network call, and routes fetch results by key so a late
//! response for an abandoned query never overwrites the current view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::gateway;
use crate::models::TagPage;
use crate::query::{QueryClient, QueryKey};

/// View state for the tag list.
///
/// One query key moves idle → loading → success or error. When the key
/// changes, the last successful page stays visible as a placeholder while
/// the next one loads, so the table never flashes blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub data: Option<TagPage>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ListState {
    /// A new key started loading. Previous data stays visible.
    pub fn key_changed(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// A fresh cache hit resolved the key without a fetch.
    pub fn cache_hit(&mut self, page: TagPage) {
        self.data = Some(page);
        self.is_loading = false;
        self.error = None;
    }

    /// A fetch completed. Results for superseded keys are dropped.
    pub fn settle(&mut self, is_current_key: bool, result: Result<TagPage, String>) {
        if !is_current_key {
            return;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.data = Some(page);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}

/// Handle returned by [`use_tags_query`].
#[derive(Clone, Copy)]
pub struct TagsQuery {
    pub state: ReadSignal<ListState>,
    set_state: WriteSignal<ListState>,
}

impl TagsQuery {
    pub fn dismiss_error(&self) {
        self.set_state.update(|state| state.error = None);
    }
}

/// Drive the tag list from the committed query in `ctx`.
///
/// Every change to the navigable state derives a `get-tags` cache key.
/// Cache hits inside the staleness window short-circuit; misses fetch,
/// populate the cache under their own key (even when superseded, so
/// back/forward navigation hits cache), and update the view only if the
/// key is still current.
pub fn use_tags_query(ctx: AppContext) -> TagsQuery {
    let cache = expect_context::<QueryClient<TagPage>>();
    let (state, set_state) = signal(ListState::default());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let query = ctx.query.get();
        let key = QueryKey::get_tags(&query.filter, query.page);

        if let Some(page) = cache.get(&key) {
            set_state.update(|state| state.cache_hit(page));
            return;
        }

        set_state.update(|state| state.key_changed());
        web_sys::console::log_1(
            &format!("[TAGS] fetching page {} filter {:?}", key.page, key.filter).into(),
        );

        let cache = cache.clone();
        spawn_local(async move {
            let result = gateway::fetch_tags(&key.filter, key.page).await;
            if let Ok(page) = &result {
                cache.set(key.clone(), page.clone());
            }
            let current = ctx.query.get_untracked();
            let is_current_key = QueryKey::get_tags(&current.filter, current.page) == key;
            set_state.update(|state| state.settle(is_current_key, result));
        });
    });

    TagsQuery { state, set_state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    fn make_page(marker: &str) -> TagPage {
        TagPage {
            first: 1,
            prev: None,
            next: None,
            last: 1,
            pages: 1,
            items: 1,
            data: vec![Tag {
                id: marker.to_string(),
                title: marker.to_string(),
                slug: marker.to_string(),
                amount_of_videos: 0,
            }],
        }
    }

    #[test]
    fn test_previous_data_stays_visible_while_loading() {
        let mut state = ListState::default();
        state.settle(true, Ok(make_page("page-1")));

        state.key_changed();

        assert!(state.is_loading);
        assert_eq!(state.data, Some(make_page("page-1")));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_replaces_data_and_stops_loading() {
        let mut state = ListState::default();
        state.key_changed();
        state.settle(true, Ok(make_page("page-2")));

        assert!(!state.is_loading);
        assert_eq!(state.data, Some(make_page("page-2")));
    }

    #[test]
    fn test_error_is_distinguishable_from_loading() {
        let mut state = ListState::default();
        state.key_changed();
        state.settle(true, Err("gateway responded with status 500".to_string()));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("gateway responded with status 500"));
        assert_eq!(state.data, None);
    }

    #[test]
    fn test_stale_result_never_touches_view_state() {
        let mut state = ListState::default();
        state.key_changed();

        // Two rapid filter commits: the first response arrives after the
        // key moved on and must be dropped; only the final one applies.
        state.settle(false, Ok(make_page("intermediate")));
        assert!(state.is_loading);
        assert_eq!(state.data, None);

        state.settle(true, Ok(make_page("final")));
        assert_eq!(state.data, Some(make_page("final")));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_error_is_dropped_too() {
        let mut state = ListState::default();
        state.key_changed();

        state.settle(false, Err("network down".to_string()));

        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_cache_hit_clears_error_and_loading() {
        let mut state = ListState::default();
        state.key_changed();
        state.settle(true, Err("network down".to_string()));

        state.cache_hit(make_page("cached"));

        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.data, Some(make_page("cached")));
    }
}
