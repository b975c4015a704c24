// TTL cache in front of upstream lookups. Absent results are stored like any
// other value so a missing repository is not requested again until it expires.
use crate::config::{CacheBackend, CacheConfig};
use crate::metrics_defs::{CACHE_HIT, CACHE_MISS};
use shared::counter;
use std::future::Future;
use std::time::Duration;

pub struct Cache<V> {
    name: &'static str,
    store: Option<moka::sync::Cache<String, V>>,
}

impl<V> Cache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, config: &CacheConfig) -> Self {
        let store = match config.backend {
            CacheBackend::Noop => None,
            CacheBackend::Memory { max_capacity } => Some(
                moka::sync::Cache::builder()
                    .max_capacity(max_capacity)
                    .time_to_live(Duration::from_secs(config.dynamic_secs))
                    .build(),
            ),
        };

        Cache { name, store }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.store.as_ref().and_then(|store| store.get(key));
        let metric_def = if value.is_some() {
            CACHE_HIT
        } else {
            CACHE_MISS
        };
        counter!(metric_def, "cache" => self.name).increment(1);
        value
    }

    pub fn insert(&self, key: &str, value: V) {
        if let Some(store) = &self.store {
            store.insert(key.to_string(), value);
        }
    }

    /// Returns the cached value for `key`, or awaits `fetch` and caches its
    /// result. Errors pass through uncached. The fetch future is dropped
    /// without being polled on a hit.
    pub async fn get_or_fetch<F, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            tracing::trace!(cache = self.name, key, "Cache hit");
            return Ok(value);
        }

        let value = fetch.await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}

pub fn warn_noop_backend() {
    tracing::warn!("=====================================================================");
    tracing::warn!("The noop cache backend is enabled. Every badge request is forwarded");
    tracing::warn!("to the upstream APIs and will quickly exhaust their rate limits.");
    tracing::warn!("Do not use this configuration in production.");
    tracing::warn!("=====================================================================");
}
