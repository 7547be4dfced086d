//! Statement assembly.
//!
//! Every line item of the [`AliasTable`](fundamentals_core::AliasTable) is resolved
//! through the same [`FactSelector::select_annual`] call; there is no per-field
//! lookup code. Derived fields are computed only from present inputs and are
//! `None` otherwise.

use std::collections::BTreeMap;

use fundamentals_core::{
    BalanceSheet, CanonicalStatement, CashFlowStatement, ExtractionConfig, IncomeStatement,
    LineItem, ReportingPeriod, ResolvedValue,
};
use tracing::debug;

use crate::ratios::simple_ratio;
use crate::selector::FactSelector;

/// Resolved values keyed by line item. Unresolved items are absent.
pub type ResolvedItems = BTreeMap<LineItem, ResolvedValue>;

/// Resolves every line item in the configured alias table.
#[must_use]
pub fn resolve_line_items(selector: &FactSelector<'_>, config: &ExtractionConfig) -> ResolvedItems {
    config
        .aliases
        .iter()
        .filter_map(|(item, alias)| {
            let resolved = selector.select_annual(alias, config.min_fiscal_year);
            if resolved.is_none() {
                debug!(item = %item, "Line item unresolved");
            }
            resolved.map(|value| (item, value))
        })
        .collect()
}

/// Resolves and assembles the canonical statement for one document.
#[must_use]
pub fn build_statement(selector: &FactSelector<'_>, config: &ExtractionConfig) -> CanonicalStatement {
    assemble(&resolve_line_items(selector, config))
}

/// Assembles the three statements from resolved line items.
#[must_use]
pub fn assemble(resolved: &ResolvedItems) -> CanonicalStatement {
    let value = |item: LineItem| resolved.get(&item).map(|r| r.value);

    let revenue = value(LineItem::Revenue);
    let cost_of_revenue = value(LineItem::CostOfRevenue);
    let sga = value(LineItem::SellingGeneralAdministrative);
    let rd = value(LineItem::ResearchDevelopment);
    let shares = value(LineItem::SharesOutstanding).filter(|s| *s > 0.0);

    let income_statement = IncomeStatement {
        revenue,
        cost_of_revenue,
        gross_profit: difference(revenue, cost_of_revenue),
        selling_general_administrative: sga,
        research_development: rd,
        operating_expenses_total: match (sga, rd) {
            (None, None) => None,
            (sga, rd) => Some(sga.unwrap_or(0.0) + rd.unwrap_or(0.0)),
        },
        operating_income: value(LineItem::OperatingIncome),
        interest_expense: value(LineItem::InterestExpense),
        income_tax_expense: value(LineItem::IncomeTaxExpense),
        net_income: value(LineItem::NetIncome),
        eps_basic: value(LineItem::EpsBasic),
        eps_diluted: value(LineItem::EpsDiluted),
        revenue_per_share: simple_ratio(revenue, shares),
    };

    let current_assets = value(LineItem::CurrentAssets);
    let current_liabilities = value(LineItem::CurrentLiabilities);
    let stockholders_equity = value(LineItem::StockholdersEquity);

    let balance_sheet = BalanceSheet {
        total_assets: value(LineItem::TotalAssets),
        current_assets,
        cash_and_equivalents: value(LineItem::CashAndEquivalents),
        accounts_receivable: value(LineItem::AccountsReceivable),
        inventory: value(LineItem::Inventory),
        total_liabilities: value(LineItem::TotalLiabilities),
        current_liabilities,
        long_term_debt: value(LineItem::LongTermDebt),
        stockholders_equity,
        retained_earnings: value(LineItem::RetainedEarnings),
        shares_outstanding: value(LineItem::SharesOutstanding),
        working_capital: difference(current_assets, current_liabilities),
        book_value_per_share: simple_ratio(stockholders_equity, shares),
    };

    let operating_cash_flow = value(LineItem::OperatingCashFlow);
    let investing_cash_flow = value(LineItem::InvestingCashFlow);

    let cash_flow_statement = CashFlowStatement {
        operating_cash_flow,
        investing_cash_flow,
        financing_cash_flow: value(LineItem::FinancingCashFlow),
        capital_expenditures: value(LineItem::CapitalExpenditures),
        dividends_paid: value(LineItem::DividendsPaid),
        // Investing flow is normally negative, so this is a sum
        free_cash_flow: operating_cash_flow
            .zip(investing_cash_flow)
            .map(|(operating, investing)| operating + investing),
    };

    let period = resolved
        .get(&LineItem::Revenue)
        .or_else(|| resolved.values().next())
        .map(ReportingPeriod::from);

    CanonicalStatement {
        income_statement,
        balance_sheet,
        cash_flow_statement,
        period,
    }
}

fn difference(minuend: Option<f64>, subtrahend: Option<f64>) -> Option<f64> {
    minuend.zip(subtrahend).map(|(a, b)| a - b)
}
