//! Analyze command implementation.
//!
//! The main flow: enumerate the schema's tables, profile each from the
//! catalog, estimate the eligible ones across the analysis window, and
//! write the JSON document.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tablespan_lib::{default_output_path, prelude::*, write_document_file};
use tracing::{debug, warn};

use crate::{ConnectArgs, display};

/// Runs a full estimation pass over the schema.
pub(crate) async fn analyze(
    connect: ConnectArgs,
    start: &str,
    end: Option<&str>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let config = display::catalog_config(connect)?;
    let window = display::parse_window(start, end)?;

    let client = CatalogClient::connect(&config)
        .await
        .context("Failed to connect to database")?;
    println!(">>> Connected: {}\n", client.database());

    let tables = client.list_tables().await?;
    let pb = display::table_progress(tables.len() as u64, quiet);

    let mut document = AnalysisResult::new();
    for table in &tables {
        pb.set_message(table.clone());
        match client.profile(table).await {
            Ok(profile) => {
                if let Some(reason) = document.record(&profile, &window).skip_reason() {
                    debug!(table = table.as_str(), reason, "table skipped");
                }
            }
            // A single bad table must not sink the run; record it and move on.
            Err(err) => {
                warn!(table = table.as_str(), error = %err, "profile failed, skipping table");
                document.skip(table.clone(), format!("profile failed: {err}"));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let path = output.unwrap_or_else(|| {
        default_output_path("db_no_datetime_estimate", Local::now().naive_local())
    });
    write_document_file(&document, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "Estimated {} tables over {} ({} skipped)",
        document.estimated_count(),
        window,
        document.skipped.len()
    );
    println!("Result file: {}", path.display());
    Ok(())
}
