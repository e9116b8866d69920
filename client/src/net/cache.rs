//! Shared, time-bounded cache of GET response bodies.
//!
//! DESIGN
//! ======
//! Several views poll the same endpoints (the current total is read by three
//! cards). Bodies are cached per `path?query` for at most one poll period, so
//! a value is never staler than it would be without the cache.
//!
//! TRADE-OFFS
//! ==========
//! Only successful bodies are cached, and the whole cache is dropped on any
//! write, logout or 401. Per-entry invalidation would need knowledge of which
//! reads a write affects; the server does not expose that.
//!
//! GENERATIONS
//! ===========
//! Every `invalidate_all` bumps a generation counter. A read records the
//! generation before it is sent and stores its body only if no invalidation
//! happened meanwhile, so a response fetched before a write never outlives it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;

const MAX_ENTRIES: u64 = 256;

#[derive(Clone)]
pub struct ResponseCache {
    inner: Option<Cache<String, Arc<str>>>,
    generation: Arc<AtomicU64>,
}

impl ResponseCache {
    /// Build a cache with the given TTL; `None` disables caching.
    #[must_use]
    pub fn new(ttl: Option<Duration>) -> Self {
        let inner = ttl.map(|ttl| Cache::builder().max_capacity(MAX_ENTRIES).time_to_live(ttl).build());
        Self { inner, generation: Arc::new(AtomicU64::new(0)) }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Current invalidation generation; pass it back to [`ResponseCache::insert`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    pub async fn get(&self, key: &str) -> Option<Arc<str>> {
        let cache = self.inner.as_ref()?;
        let hit = cache.get(key).await;
        if hit.is_some() {
            tracing::trace!(key, "response cache hit");
        }
        hit
    }

    /// Store `body` read under `generation`. Skipped when the cache was
    /// invalidated after that read started.
    pub async fn insert(&self, key: String, body: Arc<str>, generation: u64) {
        let Some(cache) = &self.inner else {
            return;
        };
        if self.generation() != generation {
            tracing::debug!(key, "stale response not cached");
            return;
        }
        cache.insert(key.clone(), body).await;
        // An invalidation may have landed between the check and the insert.
        if self.generation() != generation {
            cache.invalidate(&key).await;
        }
    }

    /// Drop every entry and start a new generation.
    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
            tracing::debug!("response cache invalidated");
        }
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("enabled", &self.is_enabled())
            .field("generation", &self.generation())
            .finish()
    }
}

/// Cache key for a GET: the path plus its query pairs in request order.
#[must_use]
pub fn cache_key(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_owned();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{path}?{}", pairs.join("&"))
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
