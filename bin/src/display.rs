//! Shared CLI plumbing: logging, prompts, window parsing, progress bars.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use tablespan_lib::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::ConnectArgs;

/// Initializes stderr logging. `RUST_LOG` wins over the verbosity flag.
pub(crate) fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the catalog configuration from the connection flags,
/// prompting once for the password when it was not passed.
pub(crate) fn catalog_config(args: ConnectArgs) -> Result<CatalogConfig> {
    let password = match args.password {
        Some(password) => password,
        None => inquire::Password::new("Database password:")
            .without_confirmation()
            .prompt()
            .context("Password prompt aborted")?,
    };

    Ok(CatalogConfig {
        host: args.host,
        port: args.port,
        user: args.user,
        password,
        database: args.database,
        ..CatalogConfig::default()
    })
}

/// Parses the analysis window flags. The end bound defaults to now so a
/// default run spreads sizes from 2000-01-01 through the present.
pub(crate) fn parse_window(start: &str, end: Option<&str>) -> Result<AnalysisWindow> {
    let start = parse_date(start)?;
    let end = match end {
        Some(end) => parse_date(end)?.into(),
        None => Local::now().naive_local(),
    };
    Ok(AnalysisWindow::new(start.into(), end)?)
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {text} (expected YYYY-MM-DD)"))
}

/// Progress bar over the schema's tables, hidden in quiet mode.
pub(crate) fn table_progress(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} tables {msg}")
            .expect("Invalid progress template"),
    );
    pb
}
