//! Fundamentals service combining a filings provider, an optional cache and extraction.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use fundamentals_core::{
    CompanyFactsProvider, CompanyRef, ExtractionConfig, FactsCache, FinancialSnapshot,
    RawFactsDocument, Result, Symbol,
};

/// Fetches company facts and turns them into [`FinancialSnapshot`]s.
///
/// Documents are read from the cache when one is configured and fall back to the
/// provider otherwise. Cache failures never fail a request; they are logged and
/// the provider is used instead.
///
/// # Example
///
/// ```rust,ignore
/// use fundamentals::{FundamentalsService, Symbol};
///
/// let service = FundamentalsService::edgar("MyApp/1.0 (contact@example.com)")?;
/// let snapshot = service.snapshot(&Symbol::new("AAPL")).await?;
/// println!("{}", serde_json::to_string_pretty(&snapshot)?);
/// ```
pub struct FundamentalsService {
    provider: Arc<dyn CompanyFactsProvider>,
    cache: Option<Arc<dyn FactsCache>>,
    config: ExtractionConfig,
}

impl std::fmt::Debug for FundamentalsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundamentalsService")
            .field("provider", &self.provider.name())
            .field("cache", &self.cache.as_ref().map(|_| "configured"))
            .field("config", &self.config)
            .finish()
    }
}

impl FundamentalsService {
    /// Create a service over a provider with the default configuration and no cache.
    #[must_use]
    pub fn new(provider: Arc<dyn CompanyFactsProvider>) -> Self {
        Self {
            provider,
            cache: None,
            config: ExtractionConfig::default(),
        }
    }

    /// Create a service backed by SEC EDGAR.
    ///
    /// # Errors
    /// Returns an error if the EDGAR HTTP client cannot be built.
    #[cfg(feature = "edgar")]
    pub fn edgar(user_agent: &str) -> Result<Self> {
        let provider = fundamentals_edgar::EdgarProvider::new(user_agent)?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Set the cache for this service.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn FactsCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the extraction configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// The extraction configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Look up a ticker and extract its snapshot.
    ///
    /// # Errors
    /// Returns [`DataError::SymbolNotFound`](fundamentals_core::DataError::SymbolNotFound)
    /// for unknown tickers, and any provider or extraction error.
    #[instrument(skip_all, fields(ticker = %ticker))]
    pub async fn snapshot(&self, ticker: &Symbol) -> Result<FinancialSnapshot> {
        let company = self.provider.lookup_company(ticker).await?;
        self.snapshot_for(&company).await
    }

    /// Extract the snapshot of an already resolved company.
    ///
    /// The metadata carries the directory's ticker and CIK. The company name
    /// comes from the facts document, or from the directory when the document
    /// has none.
    ///
    /// # Errors
    /// Returns any provider or extraction error.
    pub async fn snapshot_for(&self, company: &CompanyRef) -> Result<FinancialSnapshot> {
        let document = self.company_facts(&company.cik).await?;
        let mut snapshot = fundamentals_extract::extract(&document, &company.symbol, &self.config)?;

        snapshot.metadata.cik = Some(company.cik.clone());
        if snapshot.metadata.company_name.is_none() {
            snapshot.metadata.company_name = Some(company.name.clone());
        }
        Ok(snapshot)
    }

    /// Fetch a company-facts document, checking the cache first.
    ///
    /// If a cache is configured, fetched documents are stored in it.
    ///
    /// # Errors
    /// Returns any provider error.
    pub async fn company_facts(&self, cik: &str) -> Result<RawFactsDocument> {
        let provider = self.provider.name();

        if let Some(cache) = &self.cache {
            match cache.get_facts(provider, cik).await {
                Ok(Some(cached)) => {
                    debug!(provider, cik, "Cache hit for company facts");
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(e) => warn!(provider, cik, error = %e, "Cache lookup failed"),
            }
        }

        debug!(provider, cik, "Fetching company facts");
        let document = self.provider.fetch_company_facts(cik).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put_facts(provider, cik, &document).await {
                warn!(
                    provider,
                    cik,
                    error = %e,
                    "Failed to cache company facts"
                );
            }
        }

        Ok(document)
    }

    /// Search the provider's company directory.
    ///
    /// # Errors
    /// Returns any provider error.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<CompanyRef>> {
        self.provider.search_companies(query, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use fundamentals_cache::InMemoryCache;
    use fundamentals_core::{DataError, DataProvider, Observation, US_GAAP};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug)]
    struct FakeProvider {
        directory: Vec<CompanyRef>,
        facts: HashMap<String, RawFactsDocument>,
        fetches: AtomicUsize,
    }

    impl FakeProvider {
        fn new() -> Self {
            let company = CompanyRef::new(Symbol::new("EXM"), "320193", "Example Corp");
            let other = CompanyRef::new(Symbol::new("EXMP"), "1234", "Exemplar Holdings");

            let observation = Observation::new(
                1_000.0,
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            )
            .with_form("10-K")
            .with_fiscal_period("FY")
            .with_fiscal_year(2023);
            let document =
                RawFactsDocument::new().with_observations(US_GAAP, "Revenues", "USD", vec![observation]);

            Self {
                facts: HashMap::from([(company.cik.clone(), document)]),
                directory: vec![company, other],
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl DataProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn description(&self) -> &str {
            "In-memory provider for tests"
        }
    }

    #[async_trait]
    impl CompanyFactsProvider for FakeProvider {
        async fn lookup_company(&self, symbol: &Symbol) -> Result<CompanyRef> {
            self.directory
                .iter()
                .find(|c| c.symbol == *symbol)
                .cloned()
                .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
        }

        async fn search_companies(&self, query: &str, limit: usize) -> Result<Vec<CompanyRef>> {
            let needle = query.to_uppercase();
            Ok(self
                .directory
                .iter()
                .filter(|c| c.symbol.as_str().contains(&needle))
                .take(limit)
                .cloned()
                .collect())
        }

        async fn fetch_company_facts(&self, cik: &str) -> Result<RawFactsDocument> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.facts
                .get(cik)
                .cloned()
                .ok_or_else(|| DataError::Network(format!("HTTP 404 for CIK {cik}")))
        }
    }

    struct FailingCache;

    #[async_trait]
    impl FactsCache for FailingCache {
        async fn get_facts(&self, _provider: &str, _cik: &str) -> Result<Option<RawFactsDocument>> {
            Err(DataError::Cache("unavailable".to_string()))
        }

        async fn put_facts(
            &self,
            _provider: &str,
            _cik: &str,
            _facts: &RawFactsDocument,
        ) -> Result<()> {
            Err(DataError::Cache("unavailable".to_string()))
        }

        async fn invalidate_stale(&self, _ttl: Duration) -> Result<usize> {
            Ok(0)
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    fn config() -> ExtractionConfig {
        ExtractionConfig::default().with_min_fiscal_year(2020)
    }

    #[tokio::test]
    async fn test_snapshot_enriches_metadata() {
        let service = FundamentalsService::new(Arc::new(FakeProvider::new())).with_config(config());

        let snapshot = service.snapshot(&Symbol::new("exm")).await.unwrap();
        assert_eq!(snapshot.metadata.ticker.as_str(), "EXM");
        assert_eq!(snapshot.metadata.cik.as_deref(), Some("0000320193"));
        assert_eq!(snapshot.metadata.company_name.as_deref(), Some("Example Corp"));
        assert_eq!(snapshot.metadata.fiscal_year, Some(2023));
        assert_eq!(snapshot.income_statement.revenue, Some(1_000.0));
    }

    #[tokio::test]
    async fn test_cache_avoids_refetch() {
        let provider = Arc::new(FakeProvider::new());
        let cache = Arc::new(InMemoryCache::new());
        let service = FundamentalsService::new(provider.clone())
            .with_cache(cache.clone())
            .with_config(config());

        let first = service.snapshot(&Symbol::new("EXM")).await.unwrap();
        let second = service.snapshot(&Symbol::new("EXM")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.fetches(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_failures_are_not_fatal() {
        let provider = Arc::new(FakeProvider::new());
        let service = FundamentalsService::new(provider.clone())
            .with_cache(Arc::new(FailingCache))
            .with_config(config());

        let snapshot = service.snapshot(&Symbol::new("EXM")).await.unwrap();
        assert_eq!(snapshot.income_statement.revenue, Some(1_000.0));
        assert_eq!(provider.fetches(), 1);
    }

    #[tokio::test]
    async fn test_unknown_ticker() {
        let service = FundamentalsService::new(Arc::new(FakeProvider::new()));
        let err = service.snapshot(&Symbol::new("NOPE")).await.unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let service = FundamentalsService::new(Arc::new(FakeProvider::new()));
        let company = CompanyRef::new(Symbol::new("GONE"), "999", "Gone Inc.");
        let err = service.snapshot_for(&company).await.unwrap_err();
        assert!(matches!(err, DataError::Network(_)));
    }

    #[tokio::test]
    async fn test_search_delegates_to_provider() {
        let service = FundamentalsService::new(Arc::new(FakeProvider::new()));
        let results = service.search("exm", 10).await.unwrap();
        assert_eq!(results.len(), 2);

        let results = service.search("exm", 1).await.unwrap();
        assert_eq!(results.len(), 1);
    }
}
