//! Extraction configuration.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::aliases::AliasTable;

/// Default number of quarterly observations kept per trend series.
pub const DEFAULT_TREND_WINDOW: usize = 4;

/// Default magnitude bound for percentage ratios.
pub const DEFAULT_RATIO_BOUND: f64 = 1000.0;

/// How many years back from the current year annual values may come from.
pub const DEFAULT_LOOKBACK_YEARS: i32 = 3;

/// Tunable parameters for turning a company-facts document into a snapshot.
///
/// # Example
///
/// ```
/// use fundamentals_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default()
///     .with_min_fiscal_year(2021)
///     .with_trend_window(8);
/// assert_eq!(config.min_fiscal_year, 2021);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractionConfig {
    /// Alias list per line item.
    pub aliases: AliasTable,
    /// Annual observations with a period end before this year are ignored.
    pub min_fiscal_year: i32,
    /// Maximum number of quarterly points per trend series.
    pub trend_window: usize,
    /// Percentage ratios whose magnitude exceeds this bound are discarded.
    pub ratio_bound: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            aliases: AliasTable::default(),
            min_fiscal_year: Utc::now().year() - DEFAULT_LOOKBACK_YEARS,
            trend_window: DEFAULT_TREND_WINDOW,
            ratio_bound: DEFAULT_RATIO_BOUND,
        }
    }
}

impl ExtractionConfig {
    /// Replaces the alias table.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the minimum fiscal year for annual resolution.
    #[must_use]
    pub const fn with_min_fiscal_year(mut self, year: i32) -> Self {
        self.min_fiscal_year = year;
        self
    }

    /// Sets the quarterly trend window.
    #[must_use]
    pub const fn with_trend_window(mut self, window: usize) -> Self {
        self.trend_window = window;
        self
    }

    /// Sets the percentage ratio magnitude bound.
    #[must_use]
    pub const fn with_ratio_bound(mut self, bound: f64) -> Self {
        self.ratio_bound = bound;
        self
    }
}
