//! Filing form and fiscal period definitions.
//!
//! This module defines [`FormType`] for the SEC filing an observation was reported in
//! and [`FiscalPeriod`] for the reporting window it covers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SEC form type an observation originates from.
///
/// Serialized as the raw SEC string (`"10-K"`, `"10-K/A"`, `"10-Q"`). Any other form
/// (8-K, 20-F, S-1, ...) is kept verbatim in [`FormType::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormType {
    /// Annual report.
    TenK,
    /// Amended annual report.
    TenKAmended,
    /// Quarterly report.
    TenQ,
    /// Any other form.
    Other(String),
}

impl FormType {
    /// Returns the SEC form string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::TenK => "10-K",
            Self::TenKAmended => "10-K/A",
            Self::TenQ => "10-Q",
            Self::Other(s) => s,
        }
    }

    /// Returns true for annual reports and their amendments.
    #[must_use]
    pub const fn is_annual(&self) -> bool {
        matches!(self, Self::TenK | Self::TenKAmended)
    }
}

impl From<&str> for FormType {
    fn from(s: &str) -> Self {
        match s {
            "10-K" => Self::TenK,
            "10-K/A" => Self::TenKAmended,
            "10-Q" => Self::TenQ,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FormType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FormType> for String {
    fn from(form: FormType) -> Self {
        form.as_str().to_string()
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting window an observation covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FiscalPeriod {
    /// Full fiscal year.
    FullYear,
    /// First quarter.
    Q1,
    /// Second quarter.
    Q2,
    /// Third quarter.
    Q3,
    /// Fourth quarter.
    Q4,
    /// Any other period code (e.g. half years reported by some filers).
    Other(String),
}

impl FiscalPeriod {
    /// Returns the SEC period code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullYear => "FY",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::Other(s) => s,
        }
    }

    /// Returns true for the four quarterly periods.
    #[must_use]
    pub const fn is_quarter(&self) -> bool {
        matches!(self, Self::Q1 | Self::Q2 | Self::Q3 | Self::Q4)
    }
}

impl From<&str> for FiscalPeriod {
    fn from(s: &str) -> Self {
        match s {
            "FY" => Self::FullYear,
            "Q1" => Self::Q1,
            "Q2" => Self::Q2,
            "Q3" => Self::Q3,
            "Q4" => Self::Q4,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FiscalPeriod {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FiscalPeriod> for String {
    fn from(period: FiscalPeriod) -> Self {
        period.as_str().to_string()
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_parsing() {
        assert_eq!(FormType::from("10-K"), FormType::TenK);
        assert_eq!(FormType::from("10-K/A"), FormType::TenKAmended);
        assert_eq!(FormType::from("10-Q"), FormType::TenQ);
        assert_eq!(FormType::from("8-K"), FormType::Other("8-K".to_string()));
        assert!(FormType::TenKAmended.is_annual());
        assert!(!FormType::TenQ.is_annual());
    }

    #[test]
    fn test_fiscal_period_serde() {
        let fp: FiscalPeriod = serde_json::from_str("\"Q3\"").unwrap();
        assert_eq!(fp, FiscalPeriod::Q3);
        assert!(fp.is_quarter());

        let fy: FiscalPeriod = serde_json::from_str("\"FY\"").unwrap();
        assert_eq!(serde_json::to_string(&fy).unwrap(), "\"FY\"");

        let h1: FiscalPeriod = serde_json::from_str("\"H1\"").unwrap();
        assert_eq!(h1.as_str(), "H1");
    }
}
