//! Data quality scoring.
//!
//! A fixed, additive checklist over an assembled statement and its ratios. A
//! check whose inputs are missing fails; missing data is itself a quality defect.
//!
//! | Check                     | Passes when                                   | Points |
//! |---------------------------|-----------------------------------------------|--------|
//! | Revenue present           | revenue > 0                                   | 25     |
//! | Gross profit valid        | gross profit > 0                              | 25     |
//! | Balance sheet present     | total assets > 0 and total liabilities known  | 25     |
//! | Cash flow present         | operating cash flow != 0                      | 25     |
//! | Profitability consistency | operating income <= gross profit              | 5      |
//! | Margin consistency        | net margin <= gross margin                    | 5      |

use fundamentals_core::{CanonicalStatement, DataQualityReport, KeyMetrics};

/// Issue reported when revenue is missing or not positive.
pub const MISSING_REVENUE: &str = "Missing revenue data";
/// Issue reported when gross profit is missing or not positive.
pub const INVALID_GROSS_PROFIT: &str = "Missing or non-positive gross profit";
/// Issue reported when the balance sheet is incomplete.
pub const MISSING_BALANCE_SHEET: &str = "Missing balance sheet data";
/// Issue reported when operating cash flow is missing or zero.
pub const MISSING_CASH_FLOW: &str = "Missing operating cash flow data";
/// Issue reported when operating income cannot be checked against gross profit.
pub const INCONSISTENT_PROFITABILITY: &str = "Inconsistent profitability data";
/// Issue reported when net margin cannot be checked against gross margin.
pub const INCONSISTENT_MARGINS: &str = "Inconsistent margin calculations";

struct Check {
    points: u32,
    issue: &'static str,
    passed: bool,
}

const PRESENCE_POINTS: u32 = 25;
const CONSISTENCY_POINTS: u32 = 5;

/// Scores a statement and its key metrics.
#[must_use]
pub fn score(statement: &CanonicalStatement, metrics: &KeyMetrics) -> DataQualityReport {
    let mut report = DataQualityReport::default();
    for check in checks(statement, metrics) {
        if check.passed {
            report.score += check.points;
        } else {
            report.issues.push(check.issue.to_string());
        }
    }
    report
}

fn checks(statement: &CanonicalStatement, metrics: &KeyMetrics) -> [Check; 6] {
    let income = &statement.income_statement;
    let balance = &statement.balance_sheet;
    let cash_flow = &statement.cash_flow_statement;

    [
        Check {
            points: PRESENCE_POINTS,
            issue: MISSING_REVENUE,
            passed: income.revenue.is_some_and(|v| v > 0.0),
        },
        Check {
            points: PRESENCE_POINTS,
            issue: INVALID_GROSS_PROFIT,
            passed: income.gross_profit.is_some_and(|v| v > 0.0),
        },
        Check {
            points: PRESENCE_POINTS,
            issue: MISSING_BALANCE_SHEET,
            passed: balance.total_assets.is_some_and(|v| v > 0.0)
                && balance.total_liabilities.is_some(),
        },
        Check {
            points: PRESENCE_POINTS,
            issue: MISSING_CASH_FLOW,
            passed: cash_flow.operating_cash_flow.is_some_and(|v| v != 0.0),
        },
        Check {
            points: CONSISTENCY_POINTS,
            issue: INCONSISTENT_PROFITABILITY,
            passed: at_most(income.operating_income, income.gross_profit),
        },
        Check {
            points: CONSISTENCY_POINTS,
            issue: INCONSISTENT_MARGINS,
            passed: at_most(metrics.net_margin, metrics.gross_margin),
        },
    ]
}

fn at_most(value: Option<f64>, limit: Option<f64>) -> bool {
    value.zip(limit).is_some_and(|(v, l)| v <= l)
}
