use super::cache::{QueryCache, QueryStart};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// App-wide query store, provided via context from `App`.
///
/// Holds one reactive [`QueryCache`] per payload type. The caches are created
/// under the owner that constructed the client, so they outlive the pages
/// that read them.
#[derive(Clone)]
pub struct QueryClient {
    caches: StoredValue<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    owner: Owner,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            caches: StoredValue::new(HashMap::new()),
            owner: Owner::current().unwrap_or_else(Owner::new),
        }
    }

    /// Reactive cache for payload type `T`, created on first use
    pub fn cache<T: Send + Sync + 'static>(&self) -> RwSignal<QueryCache<T>> {
        let type_id = TypeId::of::<T>();
        let existing = self.caches.with_value(|caches| {
            caches
                .get(&type_id)
                .and_then(|boxed| (**boxed).downcast_ref::<RwSignal<QueryCache<T>>>())
                .copied()
        });
        if let Some(cache) = existing {
            return cache;
        }

        let cache = self.owner.with(|| RwSignal::new(QueryCache::<T>::new()));
        self.caches.update_value(|caches| {
            caches.insert(type_id, Box::new(cache));
        });
        cache
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// What a component reads from a query
pub struct QueryResult<T: Send + Sync + 'static> {
    pub data: Signal<Option<Arc<T>>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Drop the cached result and fetch again
    pub refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryResult<T> {}

/// Subscribe to the query `key`, starting `fetcher` unless a fetch for the
/// same key is already running or its result is cached.
///
/// Re-renders of the caller do not refetch: only `refetch` does.
pub fn use_query<T, F, Fut>(key: &'static str, fetcher: F) -> QueryResult<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let client = use_context::<QueryClient>().expect("QueryClient context not found");
    let cache = client.cache::<T>();

    if cache.try_update(|c| c.begin(key)) == Some(QueryStart::Fetch) {
        spawn_fetch(cache, key, fetcher);
    } else {
        log::debug!("query '{}': served from cache", key);
    }

    let state = Signal::derive(move || cache.with(|c| c.state(key)));

    QueryResult {
        data: Signal::derive(move || state.with(|s| s.data())),
        is_loading: Signal::derive(move || state.with(|s| s.is_loading())),
        error: Signal::derive(move || state.with(|s| s.error().map(str::to_string))),
        refetch: Callback::new(move |_: ()| {
            if cache.try_update(|c| c.invalidate(key)) == Some(QueryStart::Fetch) {
                spawn_fetch(cache, key, fetcher);
            }
        }),
    }
}

fn spawn_fetch<T, F, Fut>(cache: RwSignal<QueryCache<T>>, key: &'static str, fetcher: F)
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    log::debug!("query '{}': fetch started", key);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetcher().await;
        match &result {
            Ok(_) => log::debug!("query '{}': fetch finished", key),
            Err(e) => log::warn!("query '{}': fetch failed: {}", key, e),
        }
        if cache.try_update(|c| c.resolve(key, result)).is_none() {
            log::warn!("query '{}': cache disposed before fetch finished", key);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FETCHES: AtomicUsize = AtomicUsize::new(0);

    async fn counting_fetch() -> Result<u32, String> {
        FETCHES.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }

    fn with_client() -> (Owner, QueryClient) {
        let owner = Owner::new();
        owner.set();
        let client = QueryClient::new();
        provide_context(client.clone());
        (owner, client)
    }

    #[test]
    fn test_cache_is_created_once_per_type() {
        let (_owner, client) = with_client();
        let first = client.cache::<u32>();
        first.update(|c| {
            c.begin("k");
        });

        let again = client.cache::<u32>();
        assert_eq!(again.with_untracked(|c| c.fetch_count("k")), 1);
        assert_eq!(client.cache::<String>().with_untracked(|c| c.fetch_count("k")), 0);
    }

    #[test]
    fn test_same_key_shares_one_entry() {
        let (_owner, client) = with_client();
        // a fetch for the key is already running
        client.cache::<u32>().update(|c| {
            c.begin("shared");
        });

        let a = use_query("shared", counting_fetch);
        let b = use_query("shared", counting_fetch);
        assert!(a.is_loading.get_untracked());
        assert!(b.is_loading.get_untracked());

        client
            .cache::<u32>()
            .update(|c| c.resolve("shared", Ok(42)));

        assert_eq!(a.data.get_untracked().as_deref(), Some(&42));
        assert_eq!(b.data.get_untracked().as_deref(), Some(&42));
        assert_eq!(FETCHES.load(Ordering::SeqCst), 0);
        assert_eq!(client.cache::<u32>().with_untracked(|c| c.fetch_count("shared")), 1);
    }

    #[test]
    fn test_refetch_during_running_fetch_is_ignored() {
        let (_owner, client) = with_client();
        client.cache::<u32>().update(|c| {
            c.begin("busy");
        });

        let query = use_query("busy", counting_fetch);
        query.refetch.run(());

        assert!(query.is_loading.get_untracked());
        assert_eq!(client.cache::<u32>().with_untracked(|c| c.fetch_count("busy")), 1);
    }

    #[test]
    fn test_cached_error_is_exposed() {
        let (_owner, client) = with_client();
        client.cache::<u32>().update(|c| {
            c.begin("broken");
            c.resolve("broken", Err("HTTP 503".into()));
        });

        let query = use_query("broken", counting_fetch);
        assert!(!query.is_loading.get_untracked());
        assert_eq!(query.error.get_untracked().as_deref(), Some("HTTP 503"));
        assert!(query.data.get_untracked().is_none());
    }
}
