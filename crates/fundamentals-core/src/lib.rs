#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamentals/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for XBRL fundamentals extraction.
//!
//! This crate provides the foundational abstractions shared by the workspace:
//!
//! - [`RawFactsDocument`](facts::RawFactsDocument) - Raw company-facts input
//! - [`AliasTable`](aliases::AliasTable) - Tag preferences per canonical line item
//! - [`ExtractionConfig`](config::ExtractionConfig) - Tunable extraction parameters
//! - [`FinancialSnapshot`](statement::FinancialSnapshot) - Canonical extraction output
//! - [`CompanyFactsProvider`](provider::CompanyFactsProvider) - Filings database boundary
//! - [`FactsCache`](cache::FactsCache) - Caching abstraction

/// Concept alias table.
pub mod aliases;
/// Cache trait for storing fetched company facts.
pub mod cache;
/// Extraction configuration.
pub mod config;
/// Error types for fundamentals operations.
pub mod error;
/// Raw XBRL company-facts document model.
pub mod facts;
/// Filing form and fiscal period definitions.
pub mod period;
/// Provider traits for reaching the filings database.
pub mod provider;
/// Canonical financial statement types.
pub mod statement;
/// Identifier types (Symbol, CompanyRef).
pub mod types;

// Re-export commonly used items at crate root
pub use aliases::{AliasTable, ConceptAlias, LineItem};
pub use cache::FactsCache;
pub use config::ExtractionConfig;
pub use error::{DataError, Result};
pub use facts::{Fact, Observation, RawFactsDocument, Taxonomy, US_GAAP};
pub use period::{FiscalPeriod, FormType};
pub use provider::{CompanyFactsProvider, DataProvider};
pub use statement::{
    BalanceSheet, CanonicalStatement, CashFlowStatement, DataQualityReport, FinancialSnapshot,
    IncomeStatement, KeyMetrics, MAX_QUALITY_SCORE, QuarterlyPoint, ReportingPeriod,
    ResolvedValue, SnapshotMetadata, Trends,
};
pub use types::{CompanyRef, Symbol};
