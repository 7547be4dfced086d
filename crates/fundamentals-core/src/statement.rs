//! Canonical financial statement types.
//!
//! This module defines the normalized output of extraction:
//!
//! - [`ResolvedValue`] - One observation chosen for a line item
//! - [`IncomeStatement`], [`BalanceSheet`], [`CashFlowStatement`] - Statement line items
//! - [`CanonicalStatement`] - The three statements plus their representative period
//! - [`KeyMetrics`] - Ratios derived from the statements
//! - [`QuarterlyPoint`] and [`Trends`] - Recent quarterly observations
//! - [`DataQualityReport`] - Completeness and consistency score
//! - [`FinancialSnapshot`] - Everything above, ready to serialize
//!
//! Every numeric field is an `Option<f64>` and serializes as a number or `null`;
//! keys are never omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// The single observation chosen for a canonical line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedValue {
    /// Reported value.
    pub value: f64,
    /// Fiscal year of the filing that reported the value.
    pub fiscal_year: i32,
    /// End date of the reporting period.
    pub period_end: NaiveDate,
    /// Date the filing was made.
    pub filed: Option<NaiveDate>,
    /// XBRL tag the value was read from.
    pub tag: String,
}

/// Fiscal period a statement represents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPeriod {
    /// Fiscal year.
    pub fiscal_year: i32,
    /// End date of the reporting period.
    pub period_end: NaiveDate,
    /// Date the filing was made.
    pub filed: Option<NaiveDate>,
}

impl From<&ResolvedValue> for ReportingPeriod {
    fn from(value: &ResolvedValue) -> Self {
        Self {
            fiscal_year: value.fiscal_year,
            period_end: value.period_end,
            filed: value.filed,
        }
    }
}

/// Income statement line items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Cost of revenue (COGS).
    pub cost_of_revenue: Option<f64>,
    /// Revenue less cost of revenue.
    pub gross_profit: Option<f64>,
    /// Selling, general and administrative expense.
    pub selling_general_administrative: Option<f64>,
    /// Research and development expense.
    pub research_development: Option<f64>,
    /// SG&A plus R&D.
    pub operating_expenses_total: Option<f64>,
    /// Operating income.
    pub operating_income: Option<f64>,
    /// Interest expense.
    pub interest_expense: Option<f64>,
    /// Income tax expense.
    pub income_tax_expense: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,
    /// Basic earnings per share.
    pub eps_basic: Option<f64>,
    /// Diluted earnings per share.
    pub eps_diluted: Option<f64>,
    /// Revenue divided by shares outstanding.
    pub revenue_per_share: Option<f64>,
}

/// Balance sheet line items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Total assets.
    pub total_assets: Option<f64>,
    /// Current assets.
    pub current_assets: Option<f64>,
    /// Cash and cash equivalents.
    pub cash_and_equivalents: Option<f64>,
    /// Accounts receivable.
    pub accounts_receivable: Option<f64>,
    /// Inventory.
    pub inventory: Option<f64>,
    /// Total liabilities.
    pub total_liabilities: Option<f64>,
    /// Current liabilities.
    pub current_liabilities: Option<f64>,
    /// Long-term debt.
    pub long_term_debt: Option<f64>,
    /// Stockholders' equity.
    pub stockholders_equity: Option<f64>,
    /// Retained earnings (accumulated deficit).
    pub retained_earnings: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Current assets less current liabilities.
    pub working_capital: Option<f64>,
    /// Stockholders' equity divided by shares outstanding.
    pub book_value_per_share: Option<f64>,
}

/// Cash flow statement line items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Net cash from operating activities.
    pub operating_cash_flow: Option<f64>,
    /// Net cash from investing activities (usually negative).
    pub investing_cash_flow: Option<f64>,
    /// Net cash from financing activities.
    pub financing_cash_flow: Option<f64>,
    /// Capital expenditures.
    pub capital_expenditures: Option<f64>,
    /// Dividends paid.
    pub dividends_paid: Option<f64>,
    /// Operating cash flow plus investing cash flow.
    pub free_cash_flow: Option<f64>,
}

/// The three statements assembled from one company-facts document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalStatement {
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Cash flow statement.
    pub cash_flow_statement: CashFlowStatement,
    /// Period of the revenue resolution, or of the first line item that resolved.
    pub period: Option<ReportingPeriod>,
}

/// Ratios derived from a [`CanonicalStatement`].
///
/// Margins and returns are percentages; the remaining ratios are plain multiples.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Gross profit as a percentage of revenue.
    pub gross_margin: Option<f64>,
    /// Operating income as a percentage of revenue.
    pub operating_margin: Option<f64>,
    /// Net income as a percentage of revenue.
    pub net_margin: Option<f64>,
    /// Net income as a percentage of total assets.
    pub return_on_assets: Option<f64>,
    /// Net income as a percentage of stockholders' equity.
    pub return_on_equity: Option<f64>,
    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,
    /// Approximate quick assets over current liabilities.
    pub quick_ratio: Option<f64>,
    /// Non-current liabilities over stockholders' equity.
    pub debt_to_equity: Option<f64>,
    /// Non-current liabilities over total assets.
    pub debt_to_assets: Option<f64>,
    /// Revenue over total assets.
    pub asset_turnover: Option<f64>,
}

/// One quarterly observation in a trend series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyPoint {
    /// Reported value.
    pub value: f64,
    /// Fiscal period code (Q1..Q4 or FY).
    pub fiscal_period: String,
    /// End date of the reporting period.
    pub period_end: NaiveDate,
    /// Fiscal year.
    pub fiscal_year: i32,
}

/// Recent quarterly series, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    /// Revenue series.
    pub revenue: Vec<QuarterlyPoint>,
    /// Net income series.
    pub net_income: Vec<QuarterlyPoint>,
}

/// Highest attainable data quality score.
pub const MAX_QUALITY_SCORE: u32 = 110;

/// Completeness and internal-consistency summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityReport {
    /// Score in `0..=110`.
    pub score: u32,
    /// One entry per failed check, in check order.
    pub issues: Vec<String>,
}

/// Identifying information for a snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Registered company name.
    pub company_name: Option<String>,
    /// CIK zero-padded to 10 digits.
    pub cik: Option<String>,
    /// Fiscal year of the representative period.
    pub fiscal_year: Option<i32>,
    /// End date of the representative period.
    pub period_end: Option<NaiveDate>,
    /// Filing date of the representative period.
    pub filing_date: Option<NaiveDate>,
}

/// Complete extraction result for one company.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    /// Identifying information.
    pub metadata: SnapshotMetadata,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
    /// Cash flow statement.
    pub cash_flow_statement: CashFlowStatement,
    /// Derived ratios.
    pub key_metrics: KeyMetrics,
    /// Recent quarterly series.
    pub trends: Trends,
    /// Data quality score and issues.
    pub data_quality: DataQualityReport,
}
