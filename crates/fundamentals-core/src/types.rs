//! Identifier types shared across crates.
//!
//! - [`Symbol`] - Ticker symbol
//! - [`CompanyRef`] - Company directory entry (ticker, CIK, name)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ticker symbol.
///
/// Symbols are automatically uppercased and trimmed on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the symbol is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A company as listed in the filings database's ticker directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// CIK zero-padded to 10 digits.
    pub cik: String,
    /// Registered company name.
    pub name: String,
}

impl CompanyRef {
    /// Creates a company reference, zero-padding the CIK to 10 digits.
    #[must_use]
    pub fn new(symbol: Symbol, cik: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            symbol,
            cik: pad_cik(cik.as_ref()),
            name: name.into(),
        }
    }
}

/// Zero-pads a CIK to the 10 digits used in EDGAR URLs.
#[must_use]
pub fn pad_cik(cik: &str) -> String {
    format!("{:0>10}", cik.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new("AAPL");
        assert_eq!(symbol.as_str(), "AAPL");

        let symbol_lower = Symbol::new(" aapl ");
        assert_eq!(symbol_lower.as_str(), "AAPL");
    }

    #[test]
    fn test_cik_padding() {
        let padded = pad_cik("320193");
        assert_eq!(padded, "0000320193");
        assert_eq!(padded.len(), 10);

        let company = CompanyRef::new(Symbol::new("aapl"), "320193", "Apple Inc.");
        assert_eq!(company.cik, "0000320193");
        assert_eq!(company.symbol.as_str(), "AAPL");
    }
}
