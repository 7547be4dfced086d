#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamentals/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Extraction pipeline from raw company facts to a [`FinancialSnapshot`].
//!
//! The pipeline is a fixed sequence of pure stages:
//!
//! 1. [`selector`] - Resolves line items from `us-gaap` facts
//! 2. [`builder`] - Assembles the three canonical statements
//! 3. [`ratios`] - Derives key metrics
//! 4. [`quality`] - Scores completeness and consistency
//! 5. [`trends`] - Samples recent quarterly series
//!
//! [`extract`] runs all five. Output depends only on the document and the
//! configuration.

/// Statement assembly.
pub mod builder;
/// Data quality scoring.
pub mod quality;
/// Ratio derivation.
pub mod ratios;
/// Fact selection.
pub mod selector;
/// Quarterly trend sampling.
pub mod trends;

#[cfg(test)]
mod fixtures;

pub use builder::{ResolvedItems, assemble, build_statement, resolve_line_items};
pub use ratios::RatioEngine;
pub use selector::FactSelector;

use fundamentals_core::{
    ExtractionConfig, FinancialSnapshot, RawFactsDocument, Result, SnapshotMetadata, Symbol,
    types::pad_cik,
};
use tracing::{debug, instrument};

/// Extracts a complete snapshot from one company-facts document.
///
/// # Errors
/// Returns [`DataError::MalformedDocument`](fundamentals_core::DataError::MalformedDocument)
/// if the document has no `us-gaap` facts. Missing line items are never an error;
/// they surface as `null` values and quality issues.
#[instrument(skip_all, fields(ticker = %ticker))]
pub fn extract(
    document: &RawFactsDocument,
    ticker: &Symbol,
    config: &ExtractionConfig,
) -> Result<FinancialSnapshot> {
    let selector = FactSelector::new(document)?;

    let statement = build_statement(&selector, config);
    let key_metrics = RatioEngine::new(config.ratio_bound).key_metrics(&statement);
    let data_quality = quality::score(&statement, &key_metrics);
    let trends = trends::sample(&selector, config);

    let period = statement.period.as_ref();
    let metadata = SnapshotMetadata {
        ticker: ticker.clone(),
        company_name: document.entity_name.clone(),
        cik: document.cik.map(|cik| pad_cik(&cik.to_string())),
        fiscal_year: period.map(|p| p.fiscal_year),
        period_end: period.map(|p| p.period_end),
        filing_date: period.and_then(|p| p.filed),
    };

    debug!(
        score = data_quality.score,
        issues = data_quality.issues.len(),
        "Extracted snapshot"
    );

    Ok(FinancialSnapshot {
        metadata,
        income_statement: statement.income_statement,
        balance_sheet: statement.balance_sheet,
        cash_flow_statement: statement.cash_flow_statement,
        key_metrics,
        trends,
        data_quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, date, document, quarterly};
    use fundamentals_core::{DataError, MAX_QUALITY_SCORE};

    fn config() -> ExtractionConfig {
        ExtractionConfig::default().with_min_fiscal_year(2020)
    }

    fn complete_document() -> RawFactsDocument {
        let mut doc = document(vec![
            (
                "Revenues",
                vec![annual(1_000.0, 2023), quarterly(260.0, 2024, 1)],
            ),
            ("CostOfRevenue", vec![annual(600.0, 2023)]),
            ("OperatingIncomeLoss", vec![annual(300.0, 2023)]),
            ("NetIncomeLoss", vec![annual(100.0, 2023)]),
            ("Assets", vec![annual(2_000.0, 2023)]),
            ("Liabilities", vec![annual(1_200.0, 2023)]),
            (
                "NetCashProvidedByUsedInOperatingActivities",
                vec![annual(250.0, 2023)],
            ),
        ]);
        doc.cik = Some(320_193);
        doc.entity_name = Some("Example Corp".to_string());
        doc
    }

    #[test]
    fn test_extract_complete_document() {
        let snapshot = extract(&complete_document(), &Symbol::new("exm"), &config()).unwrap();

        assert_eq!(snapshot.metadata.ticker.as_str(), "EXM");
        assert_eq!(snapshot.metadata.cik.as_deref(), Some("0000320193"));
        assert_eq!(snapshot.metadata.company_name.as_deref(), Some("Example Corp"));
        assert_eq!(snapshot.metadata.fiscal_year, Some(2023));
        assert_eq!(snapshot.metadata.period_end, Some(date(2023, 12, 31)));
        assert_eq!(snapshot.metadata.filing_date, Some(date(2024, 2, 15)));

        assert_eq!(snapshot.income_statement.gross_profit, Some(400.0));
        assert_eq!(snapshot.key_metrics.gross_margin, Some(40.0));
        assert_eq!(snapshot.key_metrics.net_margin, Some(10.0));
        assert_eq!(snapshot.data_quality.score, MAX_QUALITY_SCORE);
        assert!(snapshot.data_quality.issues.is_empty());
        assert_eq!(snapshot.trends.revenue.len(), 2);
        assert_eq!(snapshot.trends.revenue[0].fiscal_period, "Q1");
    }

    #[test]
    fn test_extract_is_deterministic() {
        let doc = complete_document();
        let ticker = Symbol::new("EXM");
        let config = config();

        let first = serde_json::to_string(&extract(&doc, &ticker, &config).unwrap()).unwrap();
        let second = serde_json::to_string(&extract(&doc, &ticker, &config).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_revenue_fact() {
        let doc = document(vec![("Revenues", vec![annual(5e9, 2023)])]);
        let snapshot = extract(&doc, &Symbol::new("ONE"), &config()).unwrap();

        assert_eq!(snapshot.income_statement.revenue, Some(5_000_000_000.0));
        assert_eq!(snapshot.metadata.fiscal_year, Some(2023));
        assert_eq!(snapshot.metadata.cik, None);
        assert_eq!(snapshot.data_quality.score, 25);
    }

    #[test]
    fn test_missing_liabilities() {
        let doc = document(vec![
            ("Revenues", vec![annual(1_000.0, 2023)]),
            ("Assets", vec![annual(2_000.0, 2023)]),
            ("StockholdersEquity", vec![annual(800.0, 2023)]),
        ]);
        let snapshot = extract(&doc, &Symbol::new("NOL"), &config()).unwrap();

        assert_eq!(snapshot.balance_sheet.total_liabilities, None);
        assert_eq!(snapshot.key_metrics.debt_to_equity, None);
        assert!(
            snapshot
                .data_quality
                .issues
                .contains(&quality::MISSING_BALANCE_SHEET.to_string())
        );
    }

    #[test]
    fn test_stale_facts_are_ignored() {
        let doc = document(vec![("Revenues", vec![annual(1_000.0, 2015)])]);
        let snapshot = extract(&doc, &Symbol::new("OLD"), &config()).unwrap();

        assert_eq!(snapshot.income_statement.revenue, None);
        assert_eq!(snapshot.metadata.fiscal_year, None);
        assert_eq!(snapshot.data_quality.score, 0);
    }

    #[test]
    fn test_document_without_us_gaap_is_malformed() {
        let doc = RawFactsDocument::new();
        let err = extract(&doc, &Symbol::new("BAD"), &config()).unwrap_err();
        assert!(matches!(err, DataError::MalformedDocument(_)));
    }
}
