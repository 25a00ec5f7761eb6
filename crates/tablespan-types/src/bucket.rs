//! Time bucket value type.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Per-granularity usage map: bucket label to formatted megabyte string.
///
/// All three label grammars (`YYYY-Www`, `YYYY-MM`, `YYYY`) sort
/// lexicographically in chronological order, so the sorted map iterates
/// buckets in time order.
pub type UsageEstimateMap = BTreeMap<String, String>;

/// A labeled half-open calendar interval `[start, end)`.
///
/// Buckets are produced in gap-free, non-overlapping sequences: each
/// bucket's `end` is the next bucket's `start`. The final bucket of a
/// sequence may extend past the analysis window's end; it is never
/// clipped to fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket {
    /// Human-readable label, unique within one generated sequence.
    pub label: String,
    /// Inclusive start of the interval.
    pub start: NaiveDateTime,
    /// Exclusive end of the interval. Always after `start`.
    pub end: NaiveDateTime,
}

impl TimeBucket {
    /// Creates a new bucket.
    #[must_use]
    pub const fn new(label: String, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { label, start, end }
    }

    /// Returns true if the instant falls inside this bucket.
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

impl std::fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} .. {})", self.label, self.start, self.end)
    }
}
