#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamentals/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR provider for XBRL company facts.
//!
//! This crate provides access to:
//!
//! - The SEC ticker directory (`company_tickers.json`) for CIK lookup and search
//! - The Company Facts API for complete XBRL fact documents
//!
//! # Example
//!
//! ```no_run
//! use fundamentals_core::{CompanyFactsProvider, Symbol};
//! use fundamentals_edgar::EdgarProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = EdgarProvider::new("MyApp/1.0 (contact@example.com)")?;
//!
//!     let company = provider.lookup_company(&Symbol::new("AAPL")).await?;
//!     println!("Company: {} (CIK: {})", company.name, company.cik);
//!
//!     let facts = provider.fetch_company_facts(&company.cik).await?;
//!     println!("Entity: {:?}", facts.entity_name);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use fundamentals_core::{
    CompanyFactsProvider, CompanyRef, DataError, DataProvider, RawFactsDocument, Result, Symbol,
    types::pad_cik,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tokio::time::{Instant, sleep};
use tracing::{debug, instrument};

/// SEC EDGAR API base URL
const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// SEC company tickers URL
const COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Default rate limit: 10 requests per second (SEC requirement)
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(100);

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const PROVIDER_NAME: &str = "SEC EDGAR";

/// Rate limiter to ensure we don't exceed SEC's rate limits
#[derive(Debug)]
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    const fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// SEC EDGAR company-facts provider.
///
/// Every request made through one provider waits on the same rate limiter. The
/// ticker directory is downloaded on first use and kept for the lifetime of the
/// provider.
#[derive(Debug)]
pub struct EdgarProvider {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    directory: OnceCell<Vec<CompanyRef>>,
}

impl EdgarProvider {
    /// Create a new EDGAR provider with the specified user agent.
    ///
    /// The SEC requires identifying user agent headers. Format should be:
    /// "AppName/Version (contact@email.com)"
    ///
    /// # Errors
    /// Returns [`DataError::InvalidParameter`] if the user agent is empty and
    /// [`DataError::Network`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self> {
        if user_agent.trim().is_empty() {
            return Err(DataError::InvalidParameter(
                "SEC EDGAR requires an identifying user agent".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| DataError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Create a new EDGAR provider with a custom HTTP client.
    ///
    /// The client is expected to carry its own user agent and timeout.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(DEFAULT_RATE_LIMIT))),
            directory: OnceCell::new(),
        }
    }

    /// Sets the minimum delay between two requests.
    #[must_use]
    pub fn with_rate_limit(mut self, min_interval: Duration) -> Self {
        self.rate_limiter = Arc::new(Mutex::new(RateLimiter::new(min_interval)));
        self
    }

    /// Make a rate-limited GET request and parse the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.rate_limiter.lock().await.wait().await;

        debug!("EDGAR request: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited {
                provider: PROVIDER_NAME.to_string(),
                retry_after: None,
            });
        }

        if !response.status().is_success() {
            return Err(DataError::Network(format!(
                "Request to {url} failed: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DataError::Parse(format!("Failed to parse response from {url}: {e}")))
    }

    /// Returns the ticker directory, downloading it on first use.
    async fn directory(&self) -> Result<&[CompanyRef]> {
        let directory = self
            .directory
            .get_or_try_init(|| async {
                debug!("Fetching company tickers from SEC");
                let raw: HashMap<String, CompanyTickerInfo> =
                    self.get_json(COMPANY_TICKERS_URL).await?;
                let directory = parse_directory(raw);
                debug!(companies = directory.len(), "Loaded ticker directory");
                Ok::<_, DataError>(directory)
            })
            .await?;
        Ok(directory)
    }
}

impl DataProvider for EdgarProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn description(&self) -> &str {
        "SEC EDGAR ticker directory and XBRL company facts from 10-K and 10-Q filings"
    }
}

#[async_trait]
impl CompanyFactsProvider for EdgarProvider {
    #[instrument(skip_all, fields(symbol = %symbol))]
    async fn lookup_company(&self, symbol: &Symbol) -> Result<CompanyRef> {
        if symbol.is_empty() {
            return Err(DataError::InvalidParameter("Empty ticker".to_string()));
        }

        let company = find_company(self.directory().await?, symbol)
            .cloned()
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))?;
        debug!("Found CIK {} for ticker {}", company.cik, symbol);
        Ok(company)
    }

    async fn search_companies(&self, query: &str, limit: usize) -> Result<Vec<CompanyRef>> {
        if query.trim().is_empty() {
            return Err(DataError::InvalidParameter("Empty search query".to_string()));
        }
        Ok(search_directory(self.directory().await?, query, limit))
    }

    #[instrument(skip(self))]
    async fn fetch_company_facts(&self, cik: &str) -> Result<RawFactsDocument> {
        let cik = validate_cik(cik)?;
        let url = format!("{EDGAR_BASE_URL}/api/xbrl/companyfacts/CIK{cik}.json");

        let value: serde_json::Value = self.get_json(&url).await?;
        let document = RawFactsDocument::from_value(value)?;
        debug!(
            taxonomies = document.facts.len(),
            entity = ?document.entity_name,
            "Fetched company facts"
        );
        Ok(document)
    }
}

/// Company ticker information from SEC JSON.
#[derive(Debug, Deserialize)]
struct CompanyTickerInfo {
    /// CIK as a number (SEC returns this as an integer)
    cik_str: u64,
    /// Ticker symbol
    ticker: String,
    /// Company name
    title: String,
}

/// Flattens the SEC directory into a list in the SEC's own ranking order.
///
/// The directory is an object keyed by rank (`"0"`, `"1"`, ...).
fn parse_directory(raw: HashMap<String, CompanyTickerInfo>) -> Vec<CompanyRef> {
    let mut ranked: Vec<(u64, CompanyTickerInfo)> = raw
        .into_iter()
        .map(|(rank, info)| (rank.parse().unwrap_or(u64::MAX), info))
        .collect();
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.ticker.cmp(&b.1.ticker)));

    ranked
        .into_iter()
        .map(|(_, info)| {
            CompanyRef::new(
                Symbol::new(info.ticker),
                info.cik_str.to_string(),
                info.title,
            )
        })
        .collect()
}

fn find_company<'a>(directory: &'a [CompanyRef], symbol: &Symbol) -> Option<&'a CompanyRef> {
    directory.iter().find(|company| company.symbol == *symbol)
}

/// Case-insensitive substring search over tickers and names.
///
/// Exact ticker matches come first; remaining matches keep directory order.
fn search_directory(directory: &[CompanyRef], query: &str, limit: usize) -> Vec<CompanyRef> {
    let needle = query.trim().to_uppercase();

    let (mut exact, partial): (Vec<&CompanyRef>, Vec<&CompanyRef>) = directory
        .iter()
        .filter(|company| {
            company.symbol.as_str().contains(&needle)
                || company.name.to_uppercase().contains(&needle)
        })
        .partition(|company| company.symbol.as_str() == needle);

    exact.extend(partial);
    exact.into_iter().take(limit).cloned().collect()
}

/// Checks that a CIK is numeric and zero-pads it to 10 digits.
fn validate_cik(cik: &str) -> Result<String> {
    let trimmed = cik.trim();
    if trimmed.is_empty() || trimmed.len() > 10 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DataError::InvalidParameter(format!("Invalid CIK: {cik:?}")));
    }
    Ok(pad_cik(trimmed))
}

// =============================================================================
// Tests
// =============================================================================
