//! Flattened tabular summary of an analysis document.
//!
//! One row per table, one column per distinct month label then per
//! distinct year label seen across all tables, plus a grand total
//! column computed from the year values. Columns are keyed by exact
//! label text, so the bucket label format upstream must stay stable.

use std::collections::BTreeSet;
use std::io::Write;

use crate::{AnalysisResult, ReportError};
use tablespan_types::{format_mb, parse_mb};

/// Header of the grand total column.
const TOTAL_COLUMN: &str = "total (MB)";

/// The flattened per-table summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Flattens a document into the tabular summary.
    ///
    /// Tables missing a label get a blank cell. The total sums each
    /// row's year values, parsed tolerantly (malformed cells count as
    /// zero), and is blank when the sum is zero.
    #[must_use]
    pub fn flatten(document: &AnalysisResult) -> Self {
        let mut months = BTreeSet::new();
        let mut years = BTreeSet::new();
        for result in document.tables.values() {
            months.extend(result.month.keys().cloned());
            years.extend(result.year.keys().cloned());
        }

        let mut columns = Vec::with_capacity(2 + months.len() + years.len());
        columns.push("table".to_string());
        columns.extend(months.iter().cloned());
        columns.extend(years.iter().cloned());
        columns.push(TOTAL_COLUMN.to_string());

        let mut rows = Vec::with_capacity(document.tables.len());
        for (name, result) in &document.tables {
            let mut row = Vec::with_capacity(columns.len());
            row.push(name.clone());

            for label in &months {
                row.push(result.month.get(label).cloned().unwrap_or_default());
            }

            let mut total = 0.0;
            for label in &years {
                let value = result.year.get(label).cloned().unwrap_or_default();
                total += parse_mb(&value);
                row.push(value);
            }

            row.push(if total > 0.0 {
                format_mb(total)
            } else {
                String::new()
            });
            rows.push(row);
        }

        Self { columns, rows }
    }

    /// Column headers, in output order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, one per table.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Writes the summary as CSV.
    ///
    /// Size cells contain thousands separators, so every field that
    /// needs it is quoted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        write_csv_row(&mut writer, &self.columns)?;
        for row in &self.rows {
            write_csv_row(&mut writer, row)?;
        }
        Ok(())
    }
}

fn write_csv_row<W: Write>(writer: &mut W, fields: &[String]) -> Result<(), ReportError> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        if field.contains([',', '"', '\n']) {
            write!(writer, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(writer, "{field}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}
