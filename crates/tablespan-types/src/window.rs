//! Analysis window definition.

use chrono::{NaiveDate, NaiveDateTime};

use crate::WindowError;

/// The date range an analysis run spreads table sizes across.
///
/// A single window is shared by every table in a run; bucket sequences
/// for all three granularities are generated from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisWindow {
    /// Start instant (inclusive).
    pub start: NaiveDateTime,
    /// End instant (exclusive for bucketing purposes).
    pub end: NaiveDateTime,
}

impl AnalysisWindow {
    /// Creates a new window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window from calendar dates, both taken at midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        Self::new(start.into(), end.into())
    }

    /// Returns true if the window covers no time at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the window contains the given instant.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Renders a window bound as a `YYYY-MM-DD` calendar date string.
    ///
    /// This is the format the output document uses for `startDate` and
    /// `endDate`. Rendering cannot fail.
    #[must_use]
    pub fn format_bound(bound: NaiveDateTime) -> String {
        bound.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for AnalysisWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            Self::format_bound(self.start),
            Self::format_bound(self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_window() {
        let window = AnalysisWindow::from_dates(date(2000, 1, 1), date(2025, 6, 1)).unwrap();
        assert!(!window.is_empty());
        assert!(window.contains(date(2010, 5, 5).into()));
        assert!(!window.contains(date(2025, 6, 1).into()));
    }

    #[test]
    fn test_reversed_window_rejected() {
        let err = AnalysisWindow::from_dates(date(2024, 1, 1), date(2023, 1, 1)).unwrap_err();
        assert!(matches!(err, WindowError::InvalidWindow { .. }));
    }

    #[test]
    fn test_empty_window() {
        let window = AnalysisWindow::from_dates(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn test_bound_formatting() {
        let window = AnalysisWindow::from_dates(date(2000, 1, 1), date(2025, 6, 19)).unwrap();
        assert_eq!(window.to_string(), "2000-01-01 to 2025-06-19");
    }
}
