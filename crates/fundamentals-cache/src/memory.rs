//! In-memory cache implementation.

use async_trait::async_trait;
use chrono::Utc;
use fundamentals_core::{FactsCache, RawFactsDocument, Result, types::pad_cik};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Cache entry with timestamp for TTL-based invalidation.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    cached_at: chrono::DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);
        age > chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// Key for company-facts cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FactsKey {
    provider: String,
    cik: String,
}

impl FactsKey {
    fn new(provider: &str, cik: &str) -> Self {
        Self {
            provider: provider.to_string(),
            cik: pad_cik(cik),
        }
    }
}

/// Simple in-memory cache for testing and development.
///
/// Documents are stored in a `RwLock`-protected `HashMap` and are lost when the
/// cache is dropped. Documents are cloned on get/put operations.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    facts: RwLock<HashMap<FactsKey, CacheEntry<RawFactsDocument>>>,
}

impl InMemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached documents.
    pub async fn len(&self) -> usize {
        self.facts.read().await.len()
    }

    /// Returns `true` if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.facts.read().await.is_empty()
    }
}

#[async_trait]
impl FactsCache for InMemoryCache {
    #[instrument(skip(self))]
    async fn get_facts(&self, provider: &str, cik: &str) -> Result<Option<RawFactsDocument>> {
        let cache = self.facts.read().await;
        match cache.get(&FactsKey::new(provider, cik)) {
            Some(entry) => {
                debug!("Cache hit for company facts");
                Ok(Some(entry.data.clone()))
            }
            None => {
                debug!("Cache miss for company facts");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, facts))]
    async fn put_facts(&self, provider: &str, cik: &str, facts: &RawFactsDocument) -> Result<()> {
        let mut cache = self.facts.write().await;
        cache.insert(FactsKey::new(provider, cik), CacheEntry::new(facts.clone()));
        debug!("Cached company facts");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        let mut cache = self.facts.write().await;
        let before = cache.len();
        cache.retain(|_, entry| !entry.is_stale(ttl));
        let removed = before - cache.len();

        if removed > 0 {
            debug!("Invalidated {} stale cache entries", removed);
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.facts.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fundamentals_core::{Observation, US_GAAP};

    fn sample_facts() -> RawFactsDocument {
        let mut doc = RawFactsDocument::new().with_observations(
            US_GAAP,
            "Revenues",
            "USD",
            vec![Observation::new(
                1_000.0,
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            )],
        );
        doc.cik = Some(320_193);
        doc
    }

    #[tokio::test]
    async fn test_memory_cache_facts() {
        let cache = InMemoryCache::new();

        // Initially no data
        let result = cache.get_facts("test", "0000320193").await.unwrap();
        assert!(result.is_none());

        let facts = sample_facts();
        cache.put_facts("test", "0000320193", &facts).await.unwrap();

        let result = cache.get_facts("test", "0000320193").await.unwrap();
        assert_eq!(result, Some(facts));
    }

    #[tokio::test]
    async fn test_memory_cache_normalizes_cik() {
        let cache = InMemoryCache::new();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        assert!(cache.get_facts("test", "0000320193").await.unwrap().is_some());
        assert!(cache.get_facts("other", "320193").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_cache_invalidate_stale() {
        let cache = InMemoryCache::new();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        let removed = cache.invalidate_stale(Duration::from_secs(3600)).await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(cache.len().await, 1);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let removed = cache.invalidate_stale(Duration::from_millis(1)).await.unwrap();
        assert_eq!(removed, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_memory_cache_huge_ttl_keeps_entries() {
        let cache = InMemoryCache::new();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        let removed = cache.invalidate_stale(Duration::MAX).await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_memory_cache_clear() {
        let cache = InMemoryCache::new();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        // Clear cache
        cache.clear().await.unwrap();

        // Verify data is gone
        let result = cache.get_facts("test", "320193").await.unwrap();
        assert!(result.is_none());
    }
}
