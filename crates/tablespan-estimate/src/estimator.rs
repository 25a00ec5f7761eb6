//! Uniform-distribution usage estimation.

use tablespan_types::{TimeBucket, UsageEstimateMap, format_mb};

/// Bytes per megabyte.
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Splits a table's total estimated size evenly across the buckets.
///
/// The model is `total_mb = row_count * avg_row_bytes / 1,048,576`,
/// with every bucket receiving `total_mb / bucket_count` regardless of
/// its calendar span: a week bucket and a year bucket get the same
/// share. That is an intentional simplification (no real temporal skew
/// is modeled), and downstream consumers depend on the exact
/// arithmetic, so it must stay a strict uniform split.
///
/// An empty bucket sequence yields an empty map. Values are formatted
/// with [`format_mb`] (three decimals, thousands separators).
#[must_use]
pub fn estimate_usage(
    row_count: u64,
    avg_row_bytes: f64,
    buckets: &[TimeBucket],
) -> UsageEstimateMap {
    if buckets.is_empty() {
        return UsageEstimateMap::new();
    }

    let total_mb = row_count as f64 * avg_row_bytes / BYTES_PER_MB;
    let per_bucket_mb = total_mb / buckets.len() as f64;

    buckets
        .iter()
        .map(|bucket| (bucket.label.clone(), format_mb(per_bucket_mb)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveDateTime};
    use tablespan_buckets::generate_buckets;
    use tablespan_types::{Granularity, parse_mb};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    // One-mebibyte table: 1,048,576 rows of one byte each.
    const MB_ROWS: u64 = 1_048_576;

    #[test]
    fn test_one_year_single_bucket() {
        let buckets = generate_buckets(dt(2023, 1, 1), dt(2024, 1, 1), Granularity::Year).unwrap();
        let usage = estimate_usage(MB_ROWS, 1.0, &buckets);
        assert_eq!(usage.len(), 1);
        assert_eq!(usage.get("2023").map(String::as_str), Some("1.000"));
    }

    #[test]
    fn test_one_year_monthly_split() {
        let buckets = generate_buckets(dt(2023, 1, 1), dt(2024, 1, 1), Granularity::Month).unwrap();
        let usage = estimate_usage(MB_ROWS, 1.0, &buckets);
        assert_eq!(usage.len(), 12);
        for month in 1..=12 {
            let label = format!("2023-{month:02}");
            assert_eq!(
                usage.get(&label).map(String::as_str),
                Some("0.083"),
                "label {label}"
            );
        }
    }

    #[test]
    fn test_conservation_within_rounding() {
        let buckets = generate_buckets(dt(2020, 1, 1), dt(2023, 1, 1), Granularity::Month).unwrap();
        let usage = estimate_usage(250_000, 384.0, &buckets);

        let total_mb = 250_000.0 * 384.0 / 1_048_576.0;
        let sum: f64 = usage.values().map(|v| parse_mb(v)).sum();
        // Each cell carries at most half a thousandth of rounding error.
        assert_abs_diff_eq!(sum, total_mb, epsilon = 0.0005 * buckets.len() as f64);
    }

    #[test]
    fn test_share_ignores_bucket_span() {
        // A clipped final month would change the share; the split must not
        // care that the last bucket overshoots the window.
        let buckets = generate_buckets(dt(2024, 1, 10), dt(2024, 3, 20), Granularity::Month).unwrap();
        let usage = estimate_usage(3 * MB_ROWS, 1.0, &buckets);
        for value in usage.values() {
            assert_eq!(value, "1.000");
        }
    }

    #[test]
    fn test_empty_buckets_empty_map() {
        let usage = estimate_usage(MB_ROWS, 1.0, &[]);
        assert!(usage.is_empty());
    }

    #[test]
    fn test_zero_rows_zero_values() {
        let buckets = generate_buckets(dt(2023, 1, 1), dt(2024, 1, 1), Granularity::Month).unwrap();
        let usage = estimate_usage(0, 512.0, &buckets);
        assert_eq!(usage.len(), 12);
        assert!(usage.values().all(|v| v == "0.000"));
    }

    #[test]
    fn test_large_table_thousands_separated() {
        // 40 GiB across four year buckets: 10,240 MB each.
        let buckets = generate_buckets(dt(2020, 1, 1), dt(2024, 1, 1), Granularity::Year).unwrap();
        let usage = estimate_usage(41_943_040, 1024.0, &buckets);
        assert_eq!(usage.get("2020").map(String::as_str), Some("10,240.000"));
    }
}
