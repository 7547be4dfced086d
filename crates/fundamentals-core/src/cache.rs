//! Cache trait for storing fetched company facts.
//!
//! This module defines the [`FactsCache`] trait that provides a unified interface
//! for caching company-facts documents between requests.

use async_trait::async_trait;
use std::time::Duration;

use crate::{error::Result, facts::RawFactsDocument};

/// Trait for caching fetched company-facts documents.
///
/// Implementations can store data in various backends (SQLite, in-memory, etc.)
/// to avoid repeated API calls. Entries are keyed by provider name and CIK.
#[async_trait]
pub trait FactsCache: Send + Sync {
    /// Retrieves a cached document.
    ///
    /// Returns `Ok(Some(doc))` if cached, `Ok(None)` if not cached.
    async fn get_facts(&self, provider: &str, cik: &str) -> Result<Option<RawFactsDocument>>;

    /// Stores a document in the cache, replacing any previous entry.
    async fn put_facts(&self, provider: &str, cik: &str, facts: &RawFactsDocument) -> Result<()>;

    /// Removes cache entries older than the specified TTL.
    ///
    /// Returns the number of entries invalidated.
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize>;

    /// Clears all cached data.
    async fn clear(&self) -> Result<()>;
}
