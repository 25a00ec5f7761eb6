//! Table eligibility classification.

use tablespan_types::TableProfile;

/// Outcome of classifying a table for synthetic bucketing.
///
/// The skipped variants are first-class results, not errors: the caller
/// surfaces them in the report's `skipped` side-channel rather than
/// dropping the table silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableClass {
    /// No temporal column, nonzero rows, nonzero average row length.
    Eligible,
    /// The table has a datetime/timestamp column and should be bucketed
    /// by that column instead of synthetically.
    SkippedHasTemporalColumn,
    /// The catalog reports an average row length of zero, so there is
    /// no reliable size signal.
    SkippedNoCapacity,
    /// The table holds no rows.
    SkippedEmpty,
}

impl TableClass {
    /// Returns true for tables that will receive an estimate.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    /// Human-readable skip reason, or `None` for eligible tables.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<&'static str> {
        match self {
            Self::Eligible => None,
            Self::SkippedHasTemporalColumn => Some("datetime/timestamp column present"),
            Self::SkippedNoCapacity => Some("AVG_ROW_LENGTH = 0"),
            Self::SkippedEmpty => Some("no rows"),
        }
    }
}

/// Decides whether a table is eligible for estimation.
///
/// Checks run in a fixed order (temporal column, then capacity signal,
/// then row count) so each profile gets exactly one outcome. Reads the
/// profile only; no side effects.
#[must_use]
pub const fn classify(profile: &TableProfile) -> TableClass {
    if profile.has_temporal_column {
        TableClass::SkippedHasTemporalColumn
    } else if profile.avg_row_bytes == 0.0 {
        TableClass::SkippedNoCapacity
    } else if profile.row_count == 0 {
        TableClass::SkippedEmpty
    } else {
        TableClass::Eligible
    }
}
