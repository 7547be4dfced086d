//! Raw XBRL company-facts document model.
//!
//! This mirrors the shape of the SEC EDGAR company-facts payload:
//!
//! ```text
//! { "cik": 320193, "entityName": "...",
//!   "facts": { "us-gaap": { "Revenues": { "units": { "USD": [ { "end": ..., "val": ... } ] } } } } }
//! ```
//!
//! Maps are ordered so that iteration and re-serialization are deterministic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::{DataError, Result},
    period::{FiscalPeriod, FormType},
};

/// The taxonomy namespace consumed by extraction.
pub const US_GAAP: &str = "us-gaap";

/// Concept tag name to [`Fact`] mapping for one taxonomy namespace.
pub type Taxonomy = BTreeMap<String, Fact>;

/// A company's complete set of XBRL facts, keyed by taxonomy namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFactsDocument {
    /// SEC CIK number.
    #[serde(default)]
    pub cik: Option<u64>,
    /// Registrant name.
    #[serde(default)]
    pub entity_name: Option<String>,
    /// Facts organized by taxonomy and tag.
    pub facts: BTreeMap<String, Taxonomy>,
}

impl RawFactsDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a company-facts JSON payload.
    ///
    /// # Errors
    /// Returns [`DataError::MalformedDocument`] if the payload is not JSON or lacks
    /// the top-level `facts` mapping.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DataError::MalformedDocument(e.to_string()))
    }

    /// Parses a company-facts payload that was already decoded into a JSON value.
    ///
    /// # Errors
    /// Same as [`RawFactsDocument::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| DataError::MalformedDocument(e.to_string()))
    }

    /// Returns the facts of a taxonomy namespace, if present.
    #[must_use]
    pub fn taxonomy(&self, namespace: &str) -> Option<&Taxonomy> {
        self.facts.get(namespace)
    }

    /// Returns the `us-gaap` facts.
    ///
    /// # Errors
    /// Returns [`DataError::MalformedDocument`] if the namespace is missing.
    pub fn us_gaap(&self) -> Result<&Taxonomy> {
        self.taxonomy(US_GAAP).ok_or_else(|| {
            DataError::MalformedDocument(format!("missing \"{US_GAAP}\" taxonomy"))
        })
    }

    /// Returns the observations reported for a tag under a unit.
    #[must_use]
    pub fn observations(&self, namespace: &str, tag: &str, unit: &str) -> Option<&[Observation]> {
        self.taxonomy(namespace)?
            .get(tag)?
            .units
            .get(unit)
            .map(Vec::as_slice)
    }

    /// Adds observations for a tag, creating the namespace and fact as needed.
    #[must_use]
    pub fn with_observations(
        mut self,
        namespace: &str,
        tag: &str,
        unit: &str,
        observations: Vec<Observation>,
    ) -> Self {
        self.facts
            .entry(namespace.to_string())
            .or_default()
            .entry(tag.to_string())
            .or_default()
            .units
            .entry(unit.to_string())
            .or_default()
            .extend(observations);
        self
    }
}

/// All observations reported for one concept tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Label.
    #[serde(default)]
    pub label: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Observations keyed by unit identifier (USD, shares, USD/shares, ...).
    #[serde(default)]
    pub units: BTreeMap<String, Vec<Observation>>,
}

/// A single reported value with its filing metadata.
///
/// The unit identifier is the key of the [`Fact::units`] map the observation is
/// stored under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Reported value.
    #[serde(rename = "val")]
    pub value: f64,
    /// End date of the period. Unparsable dates are read as `None`.
    #[serde(rename = "end", default, deserialize_with = "lenient_date")]
    pub period_end: Option<NaiveDate>,
    /// Start date of the period (None for instant facts like balance sheet items).
    #[serde(rename = "start", default, deserialize_with = "lenient_date")]
    pub period_start: Option<NaiveDate>,
    /// Accession number of the filing.
    #[serde(rename = "accn", default)]
    pub accession: Option<String>,
    /// Fiscal year of the filing.
    #[serde(rename = "fy", default)]
    pub fiscal_year: Option<i32>,
    /// Fiscal period.
    #[serde(rename = "fp", default)]
    pub fiscal_period: Option<FiscalPeriod>,
    /// Form type.
    #[serde(default)]
    pub form: Option<FormType>,
    /// Filed date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub filed: Option<NaiveDate>,
    /// Calendar frame (e.g. `CY2023`).
    #[serde(default)]
    pub frame: Option<String>,
}

impl Observation {
    /// Creates an observation with only a value and period end.
    #[must_use]
    pub const fn new(value: f64, period_end: NaiveDate) -> Self {
        Self {
            value,
            period_end: Some(period_end),
            period_start: None,
            accession: None,
            fiscal_year: None,
            fiscal_period: None,
            form: None,
            filed: None,
            frame: None,
        }
    }

    /// Sets the form type.
    #[must_use]
    pub fn with_form(mut self, form: impl Into<FormType>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Sets the fiscal period.
    #[must_use]
    pub fn with_fiscal_period(mut self, fiscal_period: impl Into<FiscalPeriod>) -> Self {
        self.fiscal_period = Some(fiscal_period.into());
        self
    }

    /// Sets the fiscal year.
    #[must_use]
    pub const fn with_fiscal_year(mut self, fiscal_year: i32) -> Self {
        self.fiscal_year = Some(fiscal_year);
        self
    }

    /// Sets the filed date.
    #[must_use]
    pub const fn with_filed(mut self, filed: NaiveDate) -> Self {
        self.filed = Some(filed);
        self
    }

    /// Returns true if the value is finite and a period end is present.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.value.is_finite() && self.period_end.is_some()
    }

    /// Fiscal year as reported, falling back to the calendar year of the period end.
    #[must_use]
    pub fn effective_fiscal_year(&self) -> Option<i32> {
        self.fiscal_year
            .or_else(|| self.period_end.map(|end| end.year()))
    }
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}
