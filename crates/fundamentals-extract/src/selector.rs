//! Fact selection.
//!
//! Resolves a [`ConceptAlias`] against the `us-gaap` facts of a document. Tags are
//! tried in preference order and the first tag with at least one qualifying
//! observation wins, even when a later tag holds a more recent value. Values are
//! never combined across tags.

use chrono::Datelike;
use fundamentals_core::{
    ConceptAlias, FiscalPeriod, FormType, Observation, QuarterlyPoint, RawFactsDocument, Result,
    ResolvedValue, Taxonomy,
};
use tracing::{debug, trace};

/// Resolves line items from one document's `us-gaap` facts.
#[derive(Debug, Clone, Copy)]
pub struct FactSelector<'a> {
    facts: &'a Taxonomy,
}

impl<'a> FactSelector<'a> {
    /// Creates a selector over a document's `us-gaap` taxonomy.
    ///
    /// # Errors
    /// Returns [`DataError::MalformedDocument`](fundamentals_core::DataError::MalformedDocument)
    /// if the document has no `us-gaap` facts.
    pub fn new(document: &'a RawFactsDocument) -> Result<Self> {
        Ok(Self::from_taxonomy(document.us_gaap()?))
    }

    /// Creates a selector over an already extracted taxonomy.
    #[must_use]
    pub const fn from_taxonomy(facts: &'a Taxonomy) -> Self {
        Self { facts }
    }

    /// Resolves the most recent annual value of a line item.
    ///
    /// Only usable 10-K or 10-K/A full-year observations whose period ends in
    /// `min_fiscal_year` or later qualify.
    #[must_use]
    pub fn select_annual(&self, alias: &ConceptAlias, min_fiscal_year: i32) -> Option<ResolvedValue> {
        let (tag, matched) = self.first_qualifying(alias, |obs| {
            obs.form.as_ref().is_some_and(FormType::is_annual)
                && obs.fiscal_period == Some(FiscalPeriod::FullYear)
                && obs
                    .period_end
                    .is_some_and(|end| end.year() >= min_fiscal_year)
        })?;

        let best = matched.first()?;
        let period_end = best.period_end?;
        let resolved = ResolvedValue {
            value: best.value,
            fiscal_year: best.effective_fiscal_year().unwrap_or_else(|| period_end.year()),
            period_end,
            filed: best.filed,
            tag: tag.to_string(),
        };
        debug!(
            tag,
            value = resolved.value,
            fiscal_year = resolved.fiscal_year,
            "Resolved annual value"
        );
        Some(resolved)
    }

    /// Resolves up to `window` recent quarterly observations, most recent first.
    ///
    /// 10-Q and 10-K observations tagged Q1-Q4 or FY qualify. Returns an empty
    /// vector when no tag qualifies.
    #[must_use]
    pub fn select_quarterly(&self, alias: &ConceptAlias, window: usize) -> Vec<QuarterlyPoint> {
        let Some((tag, matched)) = self.first_qualifying(alias, |obs| {
            matches!(obs.form, Some(FormType::TenQ | FormType::TenK))
                && obs
                    .fiscal_period
                    .as_ref()
                    .is_some_and(|fp| fp.is_quarter() || *fp == FiscalPeriod::FullYear)
        }) else {
            return Vec::new();
        };

        let points: Vec<QuarterlyPoint> = matched
            .into_iter()
            .filter_map(|obs| {
                let period_end = obs.period_end?;
                Some(QuarterlyPoint {
                    value: obs.value,
                    fiscal_period: obs
                        .fiscal_period
                        .as_ref()
                        .map(|fp| fp.as_str().to_string())
                        .unwrap_or_default(),
                    period_end,
                    fiscal_year: obs
                        .effective_fiscal_year()
                        .unwrap_or_else(|| period_end.year()),
                })
            })
            .take(window)
            .collect();

        debug!(tag, count = points.len(), "Resolved quarterly series");
        points
    }

    /// Returns the first tag with any usable observation accepted by `accept`,
    /// together with those observations sorted by period end, newest first.
    ///
    /// Ties keep document order.
    fn first_qualifying<'t, F>(
        &self,
        alias: &'t ConceptAlias,
        accept: F,
    ) -> Option<(&'t str, Vec<&'a Observation>)>
    where
        F: Fn(&Observation) -> bool,
    {
        for tag in &alias.tags {
            let Some(observations) = self
                .facts
                .get(tag)
                .and_then(|fact| fact.units.get(&alias.unit))
            else {
                continue;
            };

            let mut matched: Vec<&'a Observation> = observations
                .iter()
                .filter(|obs| obs.is_usable() && accept(*obs))
                .collect();

            if matched.is_empty() {
                trace!(tag, unit = %alias.unit, "Tag present without qualifying observations");
                continue;
            }

            matched.sort_by(|a, b| b.period_end.cmp(&a.period_end));
            return Some((tag.as_str(), matched));
        }

        None
    }
}
