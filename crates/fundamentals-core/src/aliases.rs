//! Concept alias table.
//!
//! Different companies use different XBRL tags for the same line item, and the same
//! company may switch tags between fiscal years. Every canonical [`LineItem`] maps to
//! a [`ConceptAlias`]: the unit its values are reported in and an ordered list of
//! acceptable `us-gaap` tags, most preferred first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unit identifier for monetary values.
pub const UNIT_USD: &str = "USD";
/// Unit identifier for share counts.
pub const UNIT_SHARES: &str = "shares";
/// Unit identifier for per-share amounts.
pub const UNIT_USD_PER_SHARE: &str = "USD/shares";

/// A canonical line item resolved directly from raw facts.
///
/// Variant order is resolution order; [`LineItem::Revenue`] comes first because it
/// supplies the snapshot's representative period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItem {
    // Income statement
    /// Total revenue.
    Revenue,
    /// Cost of revenue (COGS).
    CostOfRevenue,
    /// Selling, general and administrative expense.
    SellingGeneralAdministrative,
    /// Research and development expense.
    ResearchDevelopment,
    /// Operating income.
    OperatingIncome,
    /// Interest expense.
    InterestExpense,
    /// Income tax expense.
    IncomeTaxExpense,
    /// Net income.
    NetIncome,
    /// Basic earnings per share.
    EpsBasic,
    /// Diluted earnings per share.
    EpsDiluted,

    // Balance sheet
    /// Total assets.
    TotalAssets,
    /// Current assets.
    CurrentAssets,
    /// Cash and cash equivalents.
    CashAndEquivalents,
    /// Accounts receivable.
    AccountsReceivable,
    /// Inventory.
    Inventory,
    /// Total liabilities.
    TotalLiabilities,
    /// Current liabilities.
    CurrentLiabilities,
    /// Long-term debt.
    LongTermDebt,
    /// Stockholders' equity.
    StockholdersEquity,
    /// Retained earnings (accumulated deficit).
    RetainedEarnings,
    /// Shares outstanding.
    SharesOutstanding,

    // Cash flow statement
    /// Net cash from operating activities.
    OperatingCashFlow,
    /// Net cash from investing activities.
    InvestingCashFlow,
    /// Net cash from financing activities.
    FinancingCashFlow,
    /// Capital expenditures.
    CapitalExpenditures,
    /// Dividends paid.
    DividendsPaid,
}

impl LineItem {
    /// Every line item, in resolution order.
    pub const ALL: [Self; 26] = [
        Self::Revenue,
        Self::CostOfRevenue,
        Self::SellingGeneralAdministrative,
        Self::ResearchDevelopment,
        Self::OperatingIncome,
        Self::InterestExpense,
        Self::IncomeTaxExpense,
        Self::NetIncome,
        Self::EpsBasic,
        Self::EpsDiluted,
        Self::TotalAssets,
        Self::CurrentAssets,
        Self::CashAndEquivalents,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::TotalLiabilities,
        Self::CurrentLiabilities,
        Self::LongTermDebt,
        Self::StockholdersEquity,
        Self::RetainedEarnings,
        Self::SharesOutstanding,
        Self::OperatingCashFlow,
        Self::InvestingCashFlow,
        Self::FinancingCashFlow,
        Self::CapitalExpenditures,
        Self::DividendsPaid,
    ];

    /// Returns the camelCase name used in configuration and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::CostOfRevenue => "costOfRevenue",
            Self::SellingGeneralAdministrative => "sellingGeneralAdministrative",
            Self::ResearchDevelopment => "researchDevelopment",
            Self::OperatingIncome => "operatingIncome",
            Self::InterestExpense => "interestExpense",
            Self::IncomeTaxExpense => "incomeTaxExpense",
            Self::NetIncome => "netIncome",
            Self::EpsBasic => "epsBasic",
            Self::EpsDiluted => "epsDiluted",
            Self::TotalAssets => "totalAssets",
            Self::CurrentAssets => "currentAssets",
            Self::CashAndEquivalents => "cashAndEquivalents",
            Self::AccountsReceivable => "accountsReceivable",
            Self::Inventory => "inventory",
            Self::TotalLiabilities => "totalLiabilities",
            Self::CurrentLiabilities => "currentLiabilities",
            Self::LongTermDebt => "longTermDebt",
            Self::StockholdersEquity => "stockholdersEquity",
            Self::RetainedEarnings => "retainedEarnings",
            Self::SharesOutstanding => "sharesOutstanding",
            Self::OperatingCashFlow => "operatingCashFlow",
            Self::InvestingCashFlow => "investingCashFlow",
            Self::FinancingCashFlow => "financingCashFlow",
            Self::CapitalExpenditures => "capitalExpenditures",
            Self::DividendsPaid => "dividendsPaid",
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of equivalent tags for one line item, read under a single unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptAlias {
    /// Unit identifier the tags are reported in.
    pub unit: String,
    /// Tag names, most preferred first.
    pub tags: Vec<String>,
}

impl ConceptAlias {
    /// Creates an alias list under an arbitrary unit.
    #[must_use]
    pub fn new(unit: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            unit: unit.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Creates an alias list for a monetary line item.
    #[must_use]
    pub fn usd(tags: &[&str]) -> Self {
        Self::new(UNIT_USD, tags)
    }

    /// Creates an alias list for a share count.
    #[must_use]
    pub fn shares(tags: &[&str]) -> Self {
        Self::new(UNIT_SHARES, tags)
    }

    /// Creates an alias list for a per-share amount.
    #[must_use]
    pub fn per_share(tags: &[&str]) -> Self {
        Self::new(UNIT_USD_PER_SHARE, tags)
    }
}

/// Mapping from every canonical line item to its alias list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable(BTreeMap<LineItem, ConceptAlias>);

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the alias list of a line item.
    #[must_use]
    pub fn get(&self, item: LineItem) -> Option<&ConceptAlias> {
        self.0.get(&item)
    }

    /// Replaces the alias list of a line item.
    #[must_use]
    pub fn with_alias(mut self, item: LineItem, alias: ConceptAlias) -> Self {
        self.0.insert(item, alias);
        self
    }

    /// Iterates line items in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (LineItem, &ConceptAlias)> {
        self.0.iter().map(|(item, alias)| (*item, alias))
    }

    /// Returns the number of configured line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no line item is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let entries = [
            // Income statement
            (
                LineItem::Revenue,
                ConceptAlias::usd(&[
                    "RevenueFromContractWithCustomerExcludingAssessedTax",
                    "Revenues",
                    "SalesRevenueNet",
                    "RevenueFromContractWithCustomerIncludingAssessedTax",
                    "SalesRevenueGoodsNet",
                    "SalesRevenueServicesNet",
                    "RevenuesNetOfInterestExpense",
                    "TotalRevenuesAndOtherIncome",
                    "RegulatedAndUnregulatedOperatingRevenue",
                    "ElectricUtilityRevenue",
                    "OperatingLeasesIncomeStatementLeaseRevenue",
                    "InterestAndDividendIncomeOperating",
                    "RealEstateRevenueNet",
                ]),
            ),
            (
                LineItem::CostOfRevenue,
                ConceptAlias::usd(&[
                    "CostOfRevenue",
                    "CostOfGoodsAndServicesSold",
                    "CostOfGoodsSold",
                    "CostOfServices",
                    "CostOfGoodsAndServiceExcludingDepreciationDepletionAndAmortization",
                    "CostOfGoodsSoldExcludingDepreciationDepletionAndAmortization",
                ]),
            ),
            (
                LineItem::SellingGeneralAdministrative,
                ConceptAlias::usd(&[
                    "SellingGeneralAndAdministrativeExpense",
                    "GeneralAndAdministrativeExpense",
                    "SellingAndMarketingExpense",
                    "SellingExpense",
                ]),
            ),
            (
                LineItem::ResearchDevelopment,
                ConceptAlias::usd(&[
                    "ResearchAndDevelopmentExpense",
                    "ResearchAndDevelopmentExpenseExcludingAcquiredInProcessCost",
                    "ResearchAndDevelopmentExpenseSoftwareExcludingAcquiredInProcessCost",
                ]),
            ),
            (
                LineItem::OperatingIncome,
                ConceptAlias::usd(&[
                    "OperatingIncomeLoss",
                    "IncomeLossFromContinuingOperationsBeforeIncomeTaxesExtraordinaryItemsNoncontrollingInterest",
                    "IncomeLossFromContinuingOperationsBeforeIncomeTaxesMinorityInterestAndIncomeLossFromEquityMethodInvestments",
                ]),
            ),
            (
                LineItem::InterestExpense,
                ConceptAlias::usd(&[
                    "InterestExpense",
                    "InterestExpenseDebt",
                    "InterestExpenseNonoperating",
                    "InterestPaidNet",
                ]),
            ),
            (
                LineItem::IncomeTaxExpense,
                ConceptAlias::usd(&[
                    "IncomeTaxExpenseBenefit",
                    "CurrentIncomeTaxExpenseBenefit",
                    "IncomeTaxesPaidNet",
                ]),
            ),
            (
                LineItem::NetIncome,
                ConceptAlias::usd(&[
                    "NetIncomeLoss",
                    "ProfitLoss",
                    "NetIncomeLossAvailableToCommonStockholdersBasic",
                    "IncomeLossFromContinuingOperations",
                    "ComprehensiveIncomeNetOfTax",
                ]),
            ),
            (
                LineItem::EpsBasic,
                ConceptAlias::per_share(&[
                    "EarningsPerShareBasic",
                    "EarningsPerShareBasicAndDiluted",
                    "IncomeLossFromContinuingOperationsPerBasicShare",
                ]),
            ),
            (
                LineItem::EpsDiluted,
                ConceptAlias::per_share(&[
                    "EarningsPerShareDiluted",
                    "EarningsPerShareBasicAndDiluted",
                    "IncomeLossFromContinuingOperationsPerDilutedShare",
                ]),
            ),
            // Balance sheet
            (
                LineItem::TotalAssets,
                ConceptAlias::usd(&["Assets", "LiabilitiesAndStockholdersEquity"]),
            ),
            (LineItem::CurrentAssets, ConceptAlias::usd(&["AssetsCurrent"])),
            (
                LineItem::CashAndEquivalents,
                ConceptAlias::usd(&[
                    "CashAndCashEquivalentsAtCarryingValue",
                    "CashCashEquivalentsRestrictedCashAndRestrictedCashEquivalents",
                    "Cash",
                    "CashAndDueFromBanks",
                    "CashCashEquivalentsAndShortTermInvestments",
                ]),
            ),
            (
                LineItem::AccountsReceivable,
                ConceptAlias::usd(&[
                    "AccountsReceivableNetCurrent",
                    "ReceivablesNetCurrent",
                    "AccountsReceivableNet",
                    "AccountsNotesAndLoansReceivableNetCurrent",
                ]),
            ),
            (
                LineItem::Inventory,
                ConceptAlias::usd(&[
                    "InventoryNet",
                    "InventoryGross",
                    "InventoryFinishedGoodsNetOfReserves",
                ]),
            ),
            // us-gaap has a single element for total and current liabilities and
            // for current assets. Sums of their components are not substituted.
            (LineItem::TotalLiabilities, ConceptAlias::usd(&["Liabilities"])),
            (
                LineItem::CurrentLiabilities,
                ConceptAlias::usd(&["LiabilitiesCurrent"]),
            ),
            (
                LineItem::LongTermDebt,
                ConceptAlias::usd(&[
                    "LongTermDebtNoncurrent",
                    "LongTermDebt",
                    "LongTermDebtAndCapitalLeaseObligations",
                    "LongTermNotesPayable",
                ]),
            ),
            (
                LineItem::StockholdersEquity,
                ConceptAlias::usd(&[
                    "StockholdersEquity",
                    "StockholdersEquityIncludingPortionAttributableToNoncontrollingInterest",
                    "PartnersCapital",
                    "MembersEquity",
                ]),
            ),
            (
                LineItem::RetainedEarnings,
                ConceptAlias::usd(&[
                    "RetainedEarningsAccumulatedDeficit",
                    "RetainedEarningsUnappropriated",
                ]),
            ),
            (
                LineItem::SharesOutstanding,
                ConceptAlias::shares(&[
                    "CommonStockSharesOutstanding",
                    "WeightedAverageNumberOfSharesOutstandingBasic",
                    "WeightedAverageNumberOfDilutedSharesOutstanding",
                    "CommonStockSharesIssued",
                ]),
            ),
            // Cash flow statement
            (
                LineItem::OperatingCashFlow,
                ConceptAlias::usd(&[
                    "NetCashProvidedByUsedInOperatingActivities",
                    "NetCashProvidedByUsedInOperatingActivitiesContinuingOperations",
                ]),
            ),
            (
                LineItem::InvestingCashFlow,
                ConceptAlias::usd(&[
                    "NetCashProvidedByUsedInInvestingActivities",
                    "NetCashProvidedByUsedInInvestingActivitiesContinuingOperations",
                ]),
            ),
            (
                LineItem::FinancingCashFlow,
                ConceptAlias::usd(&[
                    "NetCashProvidedByUsedInFinancingActivities",
                    "NetCashProvidedByUsedInFinancingActivitiesContinuingOperations",
                ]),
            ),
            (
                LineItem::CapitalExpenditures,
                ConceptAlias::usd(&[
                    "PaymentsToAcquirePropertyPlantAndEquipment",
                    "PaymentsToAcquireProductiveAssets",
                    "PaymentsForCapitalImprovements",
                    "PaymentsToAcquireOtherPropertyPlantAndEquipment",
                ]),
            ),
            (
                LineItem::DividendsPaid,
                ConceptAlias::usd(&[
                    "PaymentsOfDividends",
                    "PaymentsOfDividendsCommonStock",
                    "PaymentsOfOrdinaryDividends",
                ]),
            ),
        ];

        Self(entries.into_iter().collect())
    }
}
