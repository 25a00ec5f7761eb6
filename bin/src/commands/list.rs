//! List command implementation.
//!
//! Shows the estimation candidates: tables with no datetime/timestamp
//! column. With `--temporal` it inverts, showing the tables that do
//! have temporal columns and which columns those are.

use anyhow::{Context, Result};
use tablespan_lib::prelude::*;

use crate::{ConnectArgs, display};

/// List tables by temporal-column presence.
pub(crate) async fn list_tables(connect: ConnectArgs, temporal: bool) -> Result<()> {
    let config = display::catalog_config(connect)?;
    let client = CatalogClient::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let tables = client.list_tables().await?;
    if tables.is_empty() {
        println!("No tables found in schema {}.", client.database());
        return Ok(());
    }

    if temporal {
        println!("{:<40} {}", "TABLE", "TEMPORAL COLUMNS");
        println!("{}", "-".repeat(70));
        let mut count = 0;
        for table in &tables {
            let columns = client.temporal_columns(table).await?;
            if !columns.is_empty() {
                println!("{table:<40} {}", columns.join(", "));
                count += 1;
            }
        }
        println!("\nTotal: {count} tables with a temporal column");
    } else {
        let mut count = 0;
        for table in &tables {
            if !client.has_temporal_column(table).await? {
                println!("{table}");
                count += 1;
            }
        }
        println!("\nTotal: {count} tables without a temporal column");
    }

    Ok(())
}
