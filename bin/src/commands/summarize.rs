//! Summarize command implementation.
//!
//! Flattens a previously written analysis document into the tabular
//! CSV summary: one row per table, one column per month/year label.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tablespan_lib::{prelude::*, read_document};

/// Flattens a JSON document into a CSV summary file.
pub(crate) fn summarize(input: &Path, output: &Path) -> Result<()> {
    let document =
        read_document(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let summary = SummaryTable::flatten(&document);

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    summary.write_csv(BufWriter::new(file))?;

    println!(
        "Summary written: {} tables, {} columns",
        summary.rows().len(),
        summary.columns().len()
    );
    println!("Output file: {}", output.display());
    Ok(())
}
