//! Bucket sequence generation.

use chrono::{Months, NaiveDateTime, TimeDelta};

use tablespan_types::{AnalysisWindow, Granularity, TimeBucket, WindowError};

/// Generates the bucket sequence covering `[start, end)`.
///
/// The first bucket starts at `start`, each bucket's end is the next
/// bucket's start, and the final bucket's end may overshoot `end` —
/// buckets are never clipped or split to fit the range. An equal start
/// and end produce an empty sequence.
///
/// Pure and deterministic: identical inputs always yield identical
/// label and boundary sequences.
///
/// # Errors
///
/// Returns [`WindowError::InvalidWindow`] if `start > end`.
pub fn generate_buckets(
    start: NaiveDateTime,
    end: NaiveDateTime,
    granularity: Granularity,
) -> Result<Vec<TimeBucket>, WindowError> {
    if start > end {
        return Err(WindowError::InvalidWindow { start, end });
    }
    Ok(buckets_between(start, end, granularity))
}

/// Generates the bucket sequence covering an [`AnalysisWindow`].
///
/// The window's constructor already guarantees `start <= end`, so this
/// variant cannot fail.
#[must_use]
pub fn window_buckets(window: &AnalysisWindow, granularity: Granularity) -> Vec<TimeBucket> {
    buckets_between(window.start, window.end, granularity)
}

fn buckets_between(
    start: NaiveDateTime,
    end: NaiveDateTime,
    granularity: Granularity,
) -> Vec<TimeBucket> {
    let mut buckets = Vec::new();
    let mut current = start;
    while current < end {
        let next = step(current, granularity);
        buckets.push(TimeBucket::new(label(current, granularity), current, next));
        current = next;
    }
    buckets
}

/// Advances one bucket width using calendar arithmetic.
///
/// Month and year steps land on the same day-of-month where it exists
/// (Jan 31 + 1 month clamps to the end of February), matching standard
/// calendar addition rather than fixed-duration approximations.
fn step(from: NaiveDateTime, granularity: Granularity) -> NaiveDateTime {
    match granularity {
        Granularity::Week => from + TimeDelta::days(7),
        Granularity::Month => from + Months::new(1),
        Granularity::Year => from + Months::new(12),
    }
}

fn label(at: NaiveDateTime, granularity: Granularity) -> String {
    // Week labels use Sunday-based week-of-year numbering (00..53), not
    // ISO weeks. Downstream summaries key columns by exact label text,
    // so the numbering scheme is part of the output contract.
    let pattern = match granularity {
        Granularity::Week => "%Y-W%U",
        Granularity::Month => "%Y-%m",
        Granularity::Year => "%Y",
    };
    at.format(pattern).to_string()
}
