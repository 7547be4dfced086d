//! Quarterly trend sampling.

use fundamentals_core::{ExtractionConfig, LineItem, QuarterlyPoint, Trends};

use crate::selector::FactSelector;

/// Samples the revenue and net income series, most recent first.
///
/// A series is empty when its line item has no alias or no qualifying
/// observation. Each series holds at most `config.trend_window` points.
#[must_use]
pub fn sample(selector: &FactSelector<'_>, config: &ExtractionConfig) -> Trends {
    Trends {
        revenue: series(selector, config, LineItem::Revenue),
        net_income: series(selector, config, LineItem::NetIncome),
    }
}

fn series(selector: &FactSelector<'_>, config: &ExtractionConfig, item: LineItem) -> Vec<QuarterlyPoint> {
    config
        .aliases
        .get(item)
        .map(|alias| selector.select_quarterly(alias, config.trend_window))
        .unwrap_or_default()
}
