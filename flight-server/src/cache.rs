//! Caching layer for flight searches.
//!
//! The catalog never changes after generation, so a search result stays
//! valid for the life of the process. Entries are keyed by the normalized
//! query; capacity and TTL only bound memory use.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::catalog::{Catalog, SearchQuery};
use crate::domain::FlightRecord;

/// Cached search result entry.
type SearchEntry = Arc<Vec<FlightRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Catalog search with result caching and artificial latency.
///
/// Every call, cached or not, waits out the configured delay so clients
/// see a consistent response time.
pub struct CachedSearch {
    catalog: Arc<Catalog>,
    results: MokaCache<SearchQuery, SearchEntry>,
    delay: Duration,
}

impl CachedSearch {
    /// Create a cached search over `catalog`.
    pub fn new(catalog: Arc<Catalog>, cache_config: &CacheConfig, delay: Duration) -> Self {
        let results = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self {
            catalog,
            results,
            delay,
        }
    }

    /// Search the catalog, using the cache if available.
    pub async fn search(&self, query: &SearchQuery) -> SearchEntry {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(cached) = self.results.get(query).await {
            debug!(date = query.date(), "search cache hit");
            return cached;
        }

        let entry = Arc::new(self.catalog.search(query));
        self.results.insert(query.clone(), entry.clone()).await;

        entry
    }

    /// Access the underlying catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
