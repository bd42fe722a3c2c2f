use std::collections::HashMap;
use std::sync::Arc;

/// State of a single keyed query
#[derive(Debug)]
pub enum QueryState<T> {
    Pending,
    Ready(Arc<T>),
    Failed(String),
}

// Manual impl: cloning only bumps the Arc, T itself need not be Clone
impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            QueryState::Pending => QueryState::Pending,
            QueryState::Ready(data) => QueryState::Ready(Arc::clone(data)),
            QueryState::Failed(e) => QueryState::Failed(e.clone()),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn data(&self) -> Option<Arc<T>> {
        match self {
            QueryState::Ready(data) => Some(Arc::clone(data)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcome of [`QueryCache::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStart {
    /// No entry for the key: caller must run the fetch and `resolve` it
    Fetch,
    /// A fetch for the key is already running
    InFlight,
    /// A settled result (data or error) is cached
    Cached,
}

#[derive(Debug)]
struct QueryEntry<T> {
    state: QueryState<T>,
    fetches: u32,
}

/// Keyed store of query results.
///
/// One fetch per key: concurrent `begin` calls for the same key are
/// deduplicated, settled results are served from cache until `invalidate`.
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<String, QueryEntry<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `key`. Marks the key pending and returns
    /// `QueryStart::Fetch` only when no entry exists.
    pub fn begin(&mut self, key: &str) -> QueryStart {
        match self.entries.get_mut(key) {
            Some(entry) if entry.state.is_loading() => QueryStart::InFlight,
            Some(_) => QueryStart::Cached,
            None => {
                self.entries.insert(
                    key.to_string(),
                    QueryEntry {
                        state: QueryState::Pending,
                        fetches: 1,
                    },
                );
                QueryStart::Fetch
            }
        }
    }

    /// Store the outcome of a fetch started by `begin`
    pub fn resolve(&mut self, key: &str, result: Result<T, String>) {
        let state = match result {
            Ok(data) => QueryState::Ready(Arc::new(data)),
            Err(e) => QueryState::Failed(e),
        };
        match self.entries.get_mut(key) {
            Some(entry) => entry.state = state,
            // resolve without a prior begin
            None => {
                self.entries.insert(key.to_string(), QueryEntry { state, fetches: 1 });
            }
        }
    }

    /// Drop the settled result so the next `begin` fetches again.
    /// Returns `QueryStart::Fetch` when the caller must start that fetch now.
    /// A running fetch is left alone.
    pub fn invalidate(&mut self, key: &str) -> QueryStart {
        match self.entries.get_mut(key) {
            Some(entry) if entry.state.is_loading() => QueryStart::InFlight,
            Some(entry) => {
                entry.state = QueryState::Pending;
                entry.fetches += 1;
                QueryStart::Fetch
            }
            None => self.begin(key),
        }
    }

    /// Current state; `Pending` for keys never requested
    pub fn state(&self, key: &str) -> QueryState<T> {
        self.entries
            .get(key)
            .map(|entry| entry.state.clone())
            .unwrap_or(QueryState::Pending)
    }

    /// Number of fetches started for `key`
    pub fn fetch_count(&self, key: &str) -> u32 {
        self.entries.get(key).map(|entry| entry.fetches).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_begin_fetches() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        assert_eq!(cache.fetch_count("k"), 0);
        assert_eq!(cache.begin("k"), QueryStart::Fetch);
        assert!(cache.state("k").is_loading());
        assert_eq!(cache.fetch_count("k"), 1);
    }

    #[test]
    fn test_concurrent_begin_is_deduplicated() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        assert_eq!(cache.begin("k"), QueryStart::Fetch);
        assert_eq!(cache.begin("k"), QueryStart::InFlight);
        assert_eq!(cache.begin("k"), QueryStart::InFlight);
        assert_eq!(cache.fetch_count("k"), 1);
    }

    #[test]
    fn test_resolved_result_is_cached() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.begin("k");
        cache.resolve("k", Ok(42));

        assert_eq!(cache.begin("k"), QueryStart::Cached);
        assert_eq!(cache.state("k").data().as_deref(), Some(&42));
        assert_eq!(cache.fetch_count("k"), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.begin("a");
        cache.resolve("a", Ok(1));
        assert_eq!(cache.begin("b"), QueryStart::Fetch);
        assert!(cache.state("b").is_loading());
        assert_eq!(cache.state("a").data().as_deref(), Some(&1));
    }

    #[test]
    fn test_failure_is_cached_until_invalidated() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.begin("k");
        cache.resolve("k", Err("HTTP 503".into()));

        assert_eq!(cache.begin("k"), QueryStart::Cached);
        assert_eq!(cache.state("k").error(), Some("HTTP 503"));

        assert_eq!(cache.invalidate("k"), QueryStart::Fetch);
        assert!(cache.state("k").is_loading());
        assert_eq!(cache.fetch_count("k"), 2);

        cache.resolve("k", Ok(7));
        assert_eq!(cache.state("k").data().as_deref(), Some(&7));
    }

    #[test]
    fn test_invalidate_does_not_interrupt_running_fetch() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        cache.begin("k");
        assert_eq!(cache.invalidate("k"), QueryStart::InFlight);
        assert_eq!(cache.fetch_count("k"), 1);
    }

    #[test]
    fn test_invalidate_unknown_key_starts_fetch() {
        let mut cache: QueryCache<u32> = QueryCache::new();
        assert_eq!(cache.invalidate("k"), QueryStart::Fetch);
        assert_eq!(cache.fetch_count("k"), 1);
    }
}
