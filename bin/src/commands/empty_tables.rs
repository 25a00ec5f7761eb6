//! Empty-tables command implementation.
//!
//! Writes a document mapping each zero-row table to the null-dates,
//! empty-maps result shape.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tablespan_lib::{default_output_path, prelude::*, write_document_file};
use tracing::warn;

use crate::{ConnectArgs, display};

/// Finds the schema's empty tables and writes them as a document.
pub(crate) async fn empty_tables(
    connect: ConnectArgs,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let config = display::catalog_config(connect)?;
    let client = CatalogClient::connect(&config)
        .await
        .context("Failed to connect to database")?;
    println!(">>> Connected: {}\n", client.database());

    let tables = client.list_tables().await?;
    let pb = display::table_progress(tables.len() as u64, quiet);

    let mut document = AnalysisResult::new();
    for table in &tables {
        pb.set_message(table.clone());
        match client.is_empty(table).await {
            Ok(true) => {
                document.tables.insert(table.clone(), TableResult::empty());
            }
            Ok(false) => {}
            // A failed count treats the table as non-empty rather than
            // aborting the scan.
            Err(err) => {
                warn!(table = table.as_str(), error = %err, "count failed, treating table as non-empty");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let path = output
        .unwrap_or_else(|| default_output_path("db_empty_tables", Local::now().naive_local()));
    write_document_file(&document, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Found {} empty tables", document.estimated_count());
    println!("Result file: {}", path.display());
    Ok(())
}
