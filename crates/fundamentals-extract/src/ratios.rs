//! Ratio derivation.
//!
//! Ratios are `None` whenever an operand is missing or non-finite or the
//! denominator is zero. Percentage ratios whose magnitude exceeds the configured
//! bound are discarded as well, since values like 10000% almost always come from
//! operands reported in different scales.

use fundamentals_core::{CanonicalStatement, KeyMetrics, config::DEFAULT_RATIO_BOUND};

/// Share of current assets counted as quick assets.
pub const QUICK_ASSET_FACTOR: f64 = 0.7;

/// Rounds to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Plain quotient rounded to two decimals, without a magnitude bound.
#[must_use]
pub fn simple_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    quotient(numerator, denominator).map(round2)
}

fn quotient(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = numerator.zip(denominator)?;
    if !n.is_finite() || !d.is_finite() || d == 0.0 {
        return None;
    }
    let q = n / d;
    q.is_finite().then_some(q)
}

/// Derives [`KeyMetrics`] from a canonical statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioEngine {
    bound: f64,
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RATIO_BOUND)
    }
}

impl RatioEngine {
    /// Creates an engine that discards percentages beyond `±bound`.
    #[must_use]
    pub const fn new(bound: f64) -> Self {
        Self { bound }
    }

    /// Quotient as a percentage rounded to two decimals.
    ///
    /// Returns `None` when the percentage falls outside `[-bound, bound]`.
    #[must_use]
    pub fn percent_ratio(&self, numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
        let percent = quotient(numerator, denominator)? * 100.0;
        if percent.abs() > self.bound {
            return None;
        }
        Some(round2(percent))
    }

    /// Computes every key metric of a statement.
    #[must_use]
    pub fn key_metrics(&self, statement: &CanonicalStatement) -> KeyMetrics {
        let income = &statement.income_statement;
        let balance = &statement.balance_sheet;

        let non_current_liabilities = balance
            .total_liabilities
            .zip(balance.current_liabilities)
            .map(|(total, current)| total - current);

        KeyMetrics {
            gross_margin: self.percent_ratio(income.gross_profit, income.revenue),
            operating_margin: self.percent_ratio(income.operating_income, income.revenue),
            net_margin: self.percent_ratio(income.net_income, income.revenue),
            return_on_assets: self.percent_ratio(income.net_income, balance.total_assets),
            return_on_equity: self.percent_ratio(income.net_income, balance.stockholders_equity),
            current_ratio: simple_ratio(balance.current_assets, balance.current_liabilities),
            quick_ratio: simple_ratio(
                balance.current_assets.map(|assets| assets * QUICK_ASSET_FACTOR),
                balance.current_liabilities,
            ),
            debt_to_equity: simple_ratio(non_current_liabilities, balance.stockholders_equity),
            debt_to_assets: simple_ratio(non_current_liabilities, balance.total_assets),
            asset_turnover: simple_ratio(income.revenue, balance.total_assets),
        }
    }
}
