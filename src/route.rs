//! Navigable State
//!
//! The committed list query (`filter` + `page`) lives in the URL query
//! string so reloads and back/forward navigation keep it. Parsing and
//! serialization are pure; only `current`/`navigate` touch the browser.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Bytes escaped when writing query parameter values.
pub(crate) const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// The committed list query: filter text plus 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: String,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// Parse a `location.search` string. Missing, malformed or
    /// out-of-range values fall back to the defaults (`""`, page 1).
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut query = Self::default();
        for pair in search.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "filter" => query.filter = decode_value(value),
                "page" => {
                    query.page = value.parse::<u32>().ok().filter(|page| *page >= 1).unwrap_or(1)
                }
                _ => {}
            }
        }
        query
    }

    /// Serialize back into a `?page=…&filter=…` query string.
    pub fn to_search(&self) -> String {
        format!(
            "?page={}&filter={}",
            self.page,
            utf8_percent_encode(&self.filter, QUERY_VALUE)
        )
    }

    /// Commit a new filter; the page always resets to 1.
    pub fn with_filter(&self, filter: &str) -> Self {
        Self {
            filter: filter.to_string(),
            page: 1,
        }
    }

    /// Jump to a page, keeping the current filter.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            filter: self.filter.clone(),
            page: page.max(1),
        }
    }
}

fn decode_value(value: &str) -> String {
    // Forms and older encoders write spaces as '+'
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

/// Read the current query state from `location.search`.
pub fn current() -> ListQuery {
    ListQuery::parse(&location_search())
}

/// Push the query state into the URL without reloading.
pub fn navigate(query: &ListQuery) {
    #[cfg(target_arch = "wasm32")]
    if let Some(history) = history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&query.to_search()));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = query;
}

/// Overwrite the current history entry instead of pushing a new one.
/// Debounced filter commits go through here so typing leaves no trail.
pub fn replace(query: &ListQuery) {
    #[cfg(target_arch = "wasm32")]
    if let Some(history) = history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&query.to_search()));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = query;
}

#[cfg(target_arch = "wasm32")]
fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

// js-sys statics are unreachable off wasm, so browser access is gated
// and native callers (tests included) see an empty location.
#[cfg(target_arch = "wasm32")]
fn location_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn location_search() -> String {
    String::new()
}
