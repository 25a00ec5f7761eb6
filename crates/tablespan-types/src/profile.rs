//! Table profile definitions.

use serde::{Deserialize, Serialize};

/// Per-table facts needed for estimation, collected from the database
/// catalog once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    /// Table name, unique within the analyzed schema.
    pub name: String,
    /// Total number of rows.
    pub row_count: u64,
    /// Average row length in bytes, as reported by the catalog.
    pub avg_row_bytes: f64,
    /// Whether the table has a datetime or timestamp column.
    pub has_temporal_column: bool,
}

impl TableProfile {
    /// Creates a new table profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        row_count: u64,
        avg_row_bytes: f64,
        has_temporal_column: bool,
    ) -> Self {
        Self {
            name: name.into(),
            row_count,
            avg_row_bytes,
            has_temporal_column,
        }
    }

    /// Total estimated table size in bytes under the catalog's averages.
    #[must_use]
    pub fn total_bytes(&self) -> f64 {
        self.row_count as f64 * self.avg_row_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_bytes() {
        let profile = TableProfile::new("events", 1000, 128.0, false);
        assert_eq!(profile.total_bytes(), 128_000.0);
    }

    #[test]
    fn test_empty_table_total() {
        let profile = TableProfile::new("audit_log", 0, 512.0, false);
        assert_eq!(profile.total_bytes(), 0.0);
    }
}
