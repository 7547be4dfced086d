//! SQLite-based cache implementation.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use fundamentals_core::{DataError, FactsCache, RawFactsDocument, Result, types::pad_cik};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, instrument};

/// SQLite-based cache for company-facts documents.
///
/// This cache stores one JSON blob per `(provider, cik)` in a SQLite database
/// file, providing persistence across application restarts.
#[derive(Debug)]
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Create a new SQLite cache at the given path.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or schema creation fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| DataError::Cache(e.to_string()))?;
        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Create an in-memory SQLite cache.
    ///
    /// Useful for testing; data is lost when the cache is dropped.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DataError::Cache(e.to_string()))?;
        let cache = Self {
            conn: Mutex::new(conn),
        };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS facts_cache (
                provider TEXT NOT NULL,
                cik TEXT NOT NULL,
                entity_name TEXT,
                data_json TEXT NOT NULL,
                cached_at TEXT NOT NULL,
                PRIMARY KEY (provider, cik)
            )",
            [],
        )
        .map_err(|e| DataError::Cache(e.to_string()))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_facts_cached_at
             ON facts_cache(cached_at)",
            [],
        )
        .map_err(|e| DataError::Cache(e.to_string()))?;

        debug!("SQLite cache schema initialized");
        Ok(())
    }
}

/// Fixed-width UTC timestamp so stored values order lexicographically.
fn timestamp(at: chrono::DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[async_trait]
impl FactsCache for SqliteCache {
    #[instrument(skip(self))]
    async fn get_facts(&self, provider: &str, cik: &str) -> Result<Option<RawFactsDocument>> {
        let cik = pad_cik(cik);

        let conn = self
            .conn
            .lock()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        let result = conn
            .query_row(
                "SELECT data_json FROM facts_cache
                 WHERE provider = ?1 AND cik = ?2",
                params![provider, cik],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        match result {
            Some(json) => {
                let facts: RawFactsDocument =
                    serde_json::from_str(&json).map_err(|e| DataError::Parse(e.to_string()))?;
                debug!("Found cached company facts");
                Ok(Some(facts))
            }
            None => {
                debug!("No cached company facts found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, facts))]
    async fn put_facts(&self, provider: &str, cik: &str, facts: &RawFactsDocument) -> Result<()> {
        let cached_at = timestamp(Utc::now());
        let cik = pad_cik(cik);
        let data_json =
            serde_json::to_string(facts).map_err(|e| DataError::Parse(e.to_string()))?;

        let conn = self
            .conn
            .lock()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        conn.execute(
            "INSERT OR REPLACE INTO facts_cache
             (provider, cik, entity_name, data_json, cached_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![provider, cik, facts.entity_name, data_json, cached_at],
        )
        .map_err(|e| DataError::Cache(e.to_string()))?;

        debug!(bytes = data_json.len(), "Cached company facts");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        // A TTL reaching past the earliest representable time leaves nothing stale
        let Some(cutoff) = chrono::TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return Ok(0);
        };
        let cutoff_str = timestamp(cutoff);

        let conn = self
            .conn
            .lock()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        let deleted = conn
            .execute(
                "DELETE FROM facts_cache WHERE cached_at < ?1",
                params![cutoff_str],
            )
            .map_err(|e| DataError::Cache(e.to_string()))?;

        if deleted > 0 {
            debug!("Invalidated {} stale cache entries", deleted);
        }

        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DataError::Cache(e.to_string()))?;

        conn.execute("DELETE FROM facts_cache", [])
            .map_err(|e| DataError::Cache(e.to_string()))?;

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
            vec![
                Observation::new(
                    383_285_000_000.0,
                    NaiveDate::from_ymd_opt(2023, 9, 30).unwrap(),
                )
                .with_form("10-K")
                .with_fiscal_period("FY")
                .with_fiscal_year(2023),
            ],
        );
        doc.cik = Some(320_193);
        doc.entity_name = Some("Apple Inc.".to_string());
        doc
    }

    #[tokio::test]
    async fn test_sqlite_cache_initialization() {
        let cache = SqliteCache::in_memory();
        assert!(cache.is_ok());
    }

    #[tokio::test]
    async fn test_facts_cache_round_trip() {
        let cache = SqliteCache::in_memory().unwrap();

        // Initially no data
        let result = cache.get_facts("test", "0000320193").await.unwrap();
        assert!(result.is_none());

        let facts = sample_facts();
        cache.put_facts("test", "320193", &facts).await.unwrap();

        let result = cache.get_facts("test", "0000320193").await.unwrap();
        assert_eq!(result, Some(facts));
    }

    #[tokio::test]
    async fn test_put_replaces_existing_entry() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        let mut updated = sample_facts();
        updated.entity_name = Some("Apple".to_string());
        cache.put_facts("test", "320193", &updated).await.unwrap();

        let result = cache.get_facts("test", "320193").await.unwrap().unwrap();
        assert_eq!(result.entity_name.as_deref(), Some("Apple"));
    }

    #[tokio::test]
    async fn test_invalidate_stale() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        let deleted = cache.invalidate_stale(Duration::from_secs(3600)).await.unwrap();
        assert_eq!(deleted, 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let deleted = cache.invalidate_stale(Duration::from_millis(1)).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(cache.get_facts("test", "320193").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_stale_with_huge_ttl() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        for ttl in [Duration::from_secs(100_000_000_000_000), Duration::MAX] {
            let deleted = cache.invalidate_stale(ttl).await.unwrap();
            assert_eq!(deleted, 0);
        }
        assert!(cache.get_facts("test", "320193").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_facts("test", "320193", &sample_facts()).await.unwrap();

        // Clear cache
        cache.clear().await.unwrap();

        // Verify data is gone
        let result = cache.get_facts("test", "320193").await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_timestamp_is_fixed_width() {
        let whole = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(timestamp(whole), "2024-01-01T00:00:00.000000Z");
    }
}
