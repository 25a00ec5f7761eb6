//! Per-table result assembly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tablespan_buckets::window_buckets;
use tablespan_estimate::{TableClass, classify, estimate_usage};
use tablespan_types::{AnalysisWindow, Granularity, TableProfile, UsageEstimateMap};

/// Estimation result for a single table.
///
/// Created once a table's eligibility is confirmed, populated
/// synchronously, and never mutated afterwards. The `None` date form
/// (with all maps empty) is the documented shape for empty tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    /// Analysis window start as `YYYY-MM-DD`, or `null` for empty tables.
    pub start_date: Option<String>,
    /// Analysis window end as `YYYY-MM-DD`, or `null` for empty tables.
    pub end_date: Option<String>,
    /// Weekly usage estimates.
    pub week: UsageEstimateMap,
    /// Monthly usage estimates.
    pub month: UsageEstimateMap,
    /// Yearly usage estimates.
    pub year: UsageEstimateMap,
}

impl TableResult {
    /// The null-dates, empty-maps result shape used for empty tables.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start_date: None,
            end_date: None,
            week: UsageEstimateMap::new(),
            month: UsageEstimateMap::new(),
            year: UsageEstimateMap::new(),
        }
    }

    /// Returns the usage map for one granularity.
    #[must_use]
    pub const fn usage(&self, granularity: Granularity) -> &UsageEstimateMap {
        match granularity {
            Granularity::Week => &self.week,
            Granularity::Month => &self.month,
            Granularity::Year => &self.year,
        }
    }
}

/// Builds the [`TableResult`] for one eligible table.
///
/// For each granularity the shared window is bucketed once and the
/// table's total size split across the buckets. Pure assembly: no I/O,
/// and with a validated window nothing here can fail.
#[must_use]
pub fn aggregate(profile: &TableProfile, window: &AnalysisWindow) -> TableResult {
    let mut result = TableResult {
        start_date: Some(AnalysisWindow::format_bound(window.start)),
        end_date: Some(AnalysisWindow::format_bound(window.end)),
        ..TableResult::empty()
    };

    for granularity in Granularity::all() {
        let buckets = window_buckets(window, *granularity);
        let usage = estimate_usage(profile.row_count, profile.avg_row_bytes, &buckets);
        match granularity {
            Granularity::Week => result.week = usage,
            Granularity::Month => result.month = usage,
            Granularity::Year => result.year = usage,
        }
    }

    result
}

/// The root analysis document: per-table results keyed by table name,
/// plus the skipped side-channel.
///
/// Serializes as a flat JSON object of table entries with one extra
/// `"skipped"` key mapping table names to skip reasons; consumers that
/// only care about estimates ignore that key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-table estimation results.
    #[serde(flatten)]
    pub tables: BTreeMap<String, TableResult>,
    /// Tables that were classified out or failed to profile, with the
    /// reason each one was skipped.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub skipped: BTreeMap<String, String>,
}

impl AnalysisResult {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
            skipped: BTreeMap::new(),
        }
    }

    /// Classifies one profile and files it on the appropriate side of
    /// the document.
    ///
    /// Returns the classification so callers can log it.
    pub fn record(&mut self, profile: &TableProfile, window: &AnalysisWindow) -> TableClass {
        let class = classify(profile);
        match class.skip_reason() {
            None => {
                self.tables
                    .insert(profile.name.clone(), aggregate(profile, window));
            }
            Some(reason) => {
                self.skip(profile.name.clone(), reason);
            }
        }
        class
    }

    /// Records a table as skipped with a reason string.
    pub fn skip(&mut self, table: impl Into<String>, reason: impl Into<String>) {
        self.skipped.insert(table.into(), reason.into());
    }

    /// Number of tables that received an estimate.
    #[must_use]
    pub fn estimated_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the document holds no estimates and no skips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.skipped.is_empty()
    }
}

/// Runs classification and aggregation over a batch of profiles.
///
/// Tables are independent; the order they are processed in does not
/// affect the document.
#[must_use]
pub fn run_analysis<I>(profiles: I, window: &AnalysisWindow) -> AnalysisResult
where
    I: IntoIterator<Item = TableProfile>,
{
    let mut result = AnalysisResult::new();
    for profile in profiles {
        result.record(&profile, window);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> AnalysisWindow {
        AnalysisWindow::from_dates(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_aggregate_fills_all_granularities() {
        let profile = TableProfile::new("metrics_raw", 1_048_576, 1.0, false);
        let result = aggregate(&profile, &window((2023, 1, 1), (2024, 1, 1)));

        assert_eq!(result.start_date.as_deref(), Some("2023-01-01"));
        assert_eq!(result.end_date.as_deref(), Some("2024-01-01"));
        assert_eq!(result.year.len(), 1);
        assert_eq!(result.month.len(), 12);
        // 365 days -> 53 week buckets, the last one overshooting.
        assert_eq!(result.week.len(), 53);
        assert_eq!(result.year.get("2023").map(String::as_str), Some("1.000"));
    }

    #[test]
    fn test_aggregate_empty_window() {
        let profile = TableProfile::new("metrics_raw", 1_048_576, 1.0, false);
        let result = aggregate(&profile, &window((2024, 5, 1), (2024, 5, 1)));

        // Dates are still rendered; every map is empty.
        assert_eq!(result.start_date.as_deref(), Some("2024-05-01"));
        for granularity in Granularity::all() {
            assert!(result.usage(*granularity).is_empty());
        }
    }

    #[test]
    fn test_record_routes_by_classification() {
        let w = window((2023, 1, 1), (2024, 1, 1));
        let mut result = AnalysisResult::new();

        let class = result.record(&TableProfile::new("good", 100, 64.0, false), &w);
        assert!(class.is_eligible());
        let class = result.record(&TableProfile::new("dated", 100, 64.0, true), &w);
        assert_eq!(class, TableClass::SkippedHasTemporalColumn);
        result.record(&TableProfile::new("hollow", 0, 64.0, false), &w);

        assert_eq!(result.estimated_count(), 1);
        assert!(result.tables.contains_key("good"));
        assert_eq!(
            result.skipped.get("dated").map(String::as_str),
            Some("datetime/timestamp column present")
        );
        assert_eq!(result.skipped.get("hollow").map(String::as_str), Some("no rows"));
    }

    #[test]
    fn test_run_analysis_order_independent() {
        let w = window((2022, 1, 1), (2023, 1, 1));
        let a = TableProfile::new("alpha", 10, 100.0, false);
        let b = TableProfile::new("beta", 20, 200.0, false);

        let forward = run_analysis([a.clone(), b.clone()], &w);
        let backward = run_analysis([b, a], &w);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_document_serialized_shape() {
        let w = window((2023, 1, 1), (2024, 1, 1));
        let mut result = run_analysis(
            [TableProfile::new("metrics_raw", 1_048_576, 1.0, false)],
            &w,
        );
        result.skip("sessions", "datetime/timestamp column present");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["metrics_raw"]["startDate"], "2023-01-01");
        assert_eq!(value["metrics_raw"]["endDate"], "2024-01-01");
        assert_eq!(value["metrics_raw"]["year"]["2023"], "1.000");
        assert_eq!(value["skipped"]["sessions"], "datetime/timestamp column present");
    }

    #[test]
    fn test_empty_table_shape_serializes_nulls() {
        let mut result = AnalysisResult::new();
        result.tables.insert("hollow".to_string(), TableResult::empty());

        let value = serde_json::to_value(&result).unwrap();
        assert!(value["hollow"]["startDate"].is_null());
        assert!(value["hollow"]["endDate"].is_null());
        assert_eq!(value["hollow"]["week"], serde_json::json!({}));
        // No skips: the side-channel key is omitted entirely.
        assert!(value.get("skipped").is_none());
    }

    #[test]
    fn test_document_round_trip() {
        let w = window((2023, 1, 1), (2024, 1, 1));
        let mut result = run_analysis(
            [
                TableProfile::new("alpha", 10, 100.0, false),
                TableProfile::new("beta", 0, 0.0, false),
            ],
            &w,
        );
        result.skip("gamma", "profile failed: connection reset");

        let text = serde_json::to_string_pretty(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
