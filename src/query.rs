//! Caching Query Layer
//!
//! Process-wide query cache keyed by (operation, filter, page). An explicit
//! service object provided through context rather than a module-level
//! singleton, so both the list path (writes) and the create path
//! (invalidation) share the same handle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Operation name shared by every tag-list cache entry.
pub const GET_TAGS: &str = "get-tags";

/// Cached entries older than this are refetched.
pub const STALE_AFTER_MS: f64 = 60_000.0;

/// Composite cache key: operation name plus its filter/page sub-key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub op: &'static str,
    pub filter: String,
    pub page: u32,
}

impl QueryKey {
    pub fn get_tags(filter: &str, page: u32) -> Self {
        Self {
            op: GET_TAGS,
            filter: filter.to_string(),
            page,
        }
    }
}

struct Entry<T> {
    value: T,
    stored_at: f64,
}

/// Keyed cache with a staleness threshold.
///
/// Clones share the same underlying map. The clock is injected so tests
/// can drive time; the app constructor uses `js_sys::Date::now`.
pub struct QueryClient<T> {
    entries: Arc<Mutex<HashMap<QueryKey, Entry<T>>>>,
    now_ms: Arc<dyn Fn() -> f64 + Send + Sync>,
    stale_after_ms: f64,
}

impl<T> Clone for QueryClient<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            now_ms: Arc::clone(&self.now_ms),
            stale_after_ms: self.stale_after_ms,
        }
    }
}

impl<T: Clone> QueryClient<T> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(js_sys::Date::now), STALE_AFTER_MS)
    }

    pub fn with_clock(now_ms: Arc<dyn Fn() -> f64 + Send + Sync>, stale_after_ms: f64) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            now_ms,
            stale_after_ms,
        }
    }

    /// Return the cached value for `key` if it is still fresh.
    pub fn get(&self, key: &QueryKey) -> Option<T> {
        let now = (self.now_ms)();
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if now - entry.stored_at < self.stale_after_ms {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store `value` under `key`, stamped with the current time.
    pub fn set(&self, key: QueryKey, value: T) {
        let stored_at = (self.now_ms)();
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, Entry { value, stored_at });
        }
    }

    /// Drop every entry whose key matches `predicate`.
    pub fn invalidate(&self, predicate: impl Fn(&QueryKey) -> bool) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|key, _| !predicate(key));
        }
    }

    /// Drop every entry under an operation name, regardless of sub-key.
    pub fn invalidate_op(&self, op: &str) {
        self.invalidate(|key| key.op == op);
    }
}

impl<T: Clone> Default for QueryClient<T> {
    fn default() -> Self {
        Self::new()
    }
}
