//! Shared test fixtures.

use chrono::NaiveDate;
use fundamentals_core::{Observation, RawFactsDocument, US_GAAP};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A 10-K full-year observation for a calendar fiscal year.
pub(crate) fn annual(value: f64, year: i32) -> Observation {
    Observation::new(value, date(year, 12, 31))
        .with_form("10-K")
        .with_fiscal_period("FY")
        .with_fiscal_year(year)
        .with_filed(date(year + 1, 2, 15))
}

/// A 10-Q observation for a calendar quarter.
pub(crate) fn quarterly(value: f64, year: i32, quarter: u32) -> Observation {
    let end = match quarter {
        1 => date(year, 3, 31),
        2 => date(year, 6, 30),
        _ => date(year, 9, 30),
    };
    Observation::new(value, end)
        .with_form("10-Q")
        .with_fiscal_period(format!("Q{quarter}"))
        .with_fiscal_year(year)
        .with_filed(end + chrono::Days::new(35))
}

/// A `us-gaap` document with every entry reported in USD.
pub(crate) fn document(entries: Vec<(&str, Vec<Observation>)>) -> RawFactsDocument {
    entries
        .into_iter()
        .fold(RawFactsDocument::new(), |doc, (tag, observations)| {
            doc.with_observations(US_GAAP, tag, "USD", observations)
        })
}
