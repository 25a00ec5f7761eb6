//! Bucket granularity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Bucket size unit for partitioning an analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// 7-calendar-day buckets, labeled `YYYY-Www`.
    Week,
    /// 1-calendar-month buckets, labeled `YYYY-MM`.
    Month,
    /// 1-calendar-year buckets, labeled `YYYY`.
    Year,
}

impl Granularity {
    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Returns all granularities, in report-field order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Week, Self::Month, Self::Year]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a granularity from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown granularity: {0} (expected week, month, or year)")]
pub struct GranularityParseError(
    /// The rejected input.
    pub String,
);

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            "year" | "y" => Ok(Self::Year),
            _ => Err(GranularityParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Granularity::Week.as_str(), "week");
        assert_eq!(Granularity::Month.as_str(), "month");
        assert_eq!(Granularity::Year.as_str(), "year");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("MONTH".parse::<Granularity>().unwrap(), Granularity::Month);
        assert_eq!("y".parse::<Granularity>().unwrap(), Granularity::Year);
        assert!("decade".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_all_ordering() {
        assert_eq!(
            Granularity::all(),
            &[Granularity::Week, Granularity::Month, Granularity::Year]
        );
    }
}
