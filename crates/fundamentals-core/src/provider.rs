//! Provider traits for reaching the filings database.
//!
//! This module defines the collaborator boundary of extraction:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`CompanyFactsProvider`] - Ticker directory and company-facts retrieval

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    facts::RawFactsDocument,
    types::{CompanyRef, Symbol},
};

/// Base trait for all data providers.
///
/// All data providers must implement this trait to provide basic metadata
/// about the provider.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "SEC EDGAR").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for company directory lookups and XBRL company facts.
///
/// Implementations own network transport, identification headers and request
/// pacing. Extraction only ever sees the returned [`RawFactsDocument`].
#[async_trait]
pub trait CompanyFactsProvider: DataProvider {
    /// Resolves a ticker to its directory entry.
    ///
    /// Returns [`DataError::SymbolNotFound`](crate::DataError::SymbolNotFound) when the
    /// ticker is not listed.
    async fn lookup_company(&self, symbol: &Symbol) -> Result<CompanyRef>;

    /// Finds companies whose ticker or name contains `query`, case-insensitively.
    ///
    /// Exact ticker matches are returned first. At most `limit` entries are returned.
    async fn search_companies(&self, query: &str, limit: usize) -> Result<Vec<CompanyRef>>;

    /// Fetches the complete company-facts document for a CIK.
    async fn fetch_company_facts(&self, cik: &str) -> Result<RawFactsDocument>;
}
