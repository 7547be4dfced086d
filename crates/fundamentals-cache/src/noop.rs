//! No-op cache implementation.

use async_trait::async_trait;
use fundamentals_core::{FactsCache, RawFactsDocument, Result};
use std::time::Duration;
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// `get_facts` always returns `Ok(None)` and `put_facts` returns `Ok(())`.
/// Useful for disabling caching or testing code paths without cache hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FactsCache for NoopCache {
    async fn get_facts(&self, _provider: &str, _cik: &str) -> Result<Option<RawFactsDocument>> {
        trace!("NoopCache: get_facts called, returning None");
        Ok(None)
    }

    async fn put_facts(
        &self,
        _provider: &str,
        _cik: &str,
        _facts: &RawFactsDocument,
    ) -> Result<()> {
        trace!("NoopCache: put_facts called, doing nothing");
        Ok(())
    }

    async fn invalidate_stale(&self, _ttl: Duration) -> Result<usize> {
        trace!("NoopCache: invalidate_stale called, returning 0");
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        trace!("NoopCache: clear called, doing nothing");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_cache_never_stores() {
        let cache = NoopCache::new();
        let facts = RawFactsDocument::new();

        cache.put_facts("test", "0000320193", &facts).await.unwrap();
        assert!(cache.get_facts("test", "0000320193").await.unwrap().is_none());
        assert_eq!(cache.invalidate_stale(Duration::ZERO).await.unwrap(), 0);
        cache.clear().await.unwrap();
    }
}
