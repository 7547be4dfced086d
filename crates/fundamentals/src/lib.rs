#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamentals/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Canonical financial statements from SEC EDGAR XBRL company facts.
//!
//! This crate re-exports the core types, the extraction pipeline, cache
//! implementations and the EDGAR provider, and provides a
//! [`FundamentalsService`] that ties them together.
//!
//! # Features
//!
//! - `edgar` - SEC EDGAR provider for company facts
//! - `cache-sqlite` - SQLite-based caching
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fundamentals::{FundamentalsService, SqliteCache, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> fundamentals::Result<()> {
//!     let service = FundamentalsService::edgar("MyApp/1.0 (contact@example.com)")?
//!         .with_cache(Arc::new(SqliteCache::new("facts.db")?));
//!
//!     let snapshot = service.snapshot(&Symbol::new("AAPL")).await?;
//!     println!("{:?}", snapshot.key_metrics);
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use fundamentals_core::*;

// Extraction pipeline
pub use fundamentals_extract::{FactSelector, RatioEngine, extract};

// Cache implementations
#[cfg(feature = "cache-sqlite")]
pub use fundamentals_cache::SqliteCache;
pub use fundamentals_cache::{InMemoryCache, NoopCache};

// Providers
#[cfg(feature = "edgar")]
pub use fundamentals_edgar::EdgarProvider;

mod service;
pub use service::FundamentalsService;
