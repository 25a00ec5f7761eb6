//! Pooled information_schema client.

use sqlx::Executor;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use thiserror::Error;
use tracing::{debug, info};

use tablespan_types::TableProfile;

use crate::CatalogConfig;

/// Errors that can occur while talking to the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Connection could not be established.
    #[error("Connection error: {0}")]
    Connect(#[source] sqlx::Error),

    /// An information_schema query failed.
    #[error("Catalog query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Counting a specific table's rows failed.
    #[error("Row count failed for `{table}`: {source}")]
    RowCount {
        /// The table whose count query failed.
        table: String,
        /// The underlying error.
        #[source]
        source: sqlx::Error,
    },
}

/// Metadata client over a MySQL connection pool.
///
/// All reads go to `information_schema` except the per-table row
/// counts, which run a `COUNT(*)` against the table itself.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pool: MySqlPool,
    database: String,
}

impl CatalogClient {
    /// Connects to the database described by the configuration.
    ///
    /// Each pooled connection gets the configured statement timeout
    /// applied server-side, so a runaway `COUNT(*)` on a huge table
    /// fails instead of hanging the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be established.
    pub async fn connect(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .charset("utf8mb4");

        let timeout_ms = config.statement_timeout.as_millis().min(u128::from(u32::MAX));
        let timeout_stmt = format!("SET SESSION max_execution_time = {timeout_ms}");

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .after_connect(move |conn, _meta| {
                let timeout_stmt = timeout_stmt.clone();
                Box::pin(async move {
                    conn.execute(timeout_stmt.as_str()).await?;
                    Ok(())
                })
            })
            .connect_with(options)
            .await
            .map_err(CatalogError::Connect)?;

        info!(database = %config.database, host = %config.host, "connected to catalog");
        Ok(Self {
            pool,
            database: config.database.clone(),
        })
    }

    /// The schema this client profiles.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Lists the schema's base tables, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_tables(&self) -> Result<Vec<String>, CatalogError> {
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = ? AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )
        .bind(&self.database)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = tables.len(), "listed base tables");
        Ok(tables)
    }

    /// Names of the table's datetime/timestamp columns, in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn temporal_columns(&self, table: &str) -> Result<Vec<String>, CatalogError> {
        Ok(sqlx::query_scalar(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_schema = ? AND table_name = ? \
               AND LOWER(data_type) IN ('datetime', 'timestamp') \
             ORDER BY ordinal_position",
        )
        .bind(&self.database)
        .bind(table)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Whether the table has any datetime/timestamp column.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn has_temporal_column(&self, table: &str) -> Result<bool, CatalogError> {
        Ok(!self.temporal_columns(table).await?.is_empty())
    }

    /// The table's average row length in bytes. A missing or NULL
    /// catalog entry reads as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn avg_row_length(&self, table: &str) -> Result<f64, CatalogError> {
        let avg: Option<Option<u64>> = sqlx::query_scalar(
            "SELECT avg_row_length FROM information_schema.tables \
             WHERE table_schema = ? AND table_name = ?",
        )
        .bind(&self.database)
        .bind(table)
        .fetch_optional(&self.pool)
        .await?;

        Ok(avg.flatten().unwrap_or(0) as f64)
    }

    /// Counts the table's rows.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the table name if the count fails.
    pub async fn row_count(&self, table: &str) -> Result<u64, CatalogError> {
        let sql = format!(
            "SELECT COUNT(*) FROM `{}`.`{}`",
            quote_ident(&self.database),
            quote_ident(table)
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| CatalogError::RowCount {
                table: table.to_string(),
                source,
            })?;

        Ok(count.max(0) as u64)
    }

    /// Whether the table holds no rows.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the table name if the count fails.
    pub async fn is_empty(&self, table: &str) -> Result<bool, CatalogError> {
        Ok(self.row_count(table).await? == 0)
    }

    /// Builds the full estimation profile for one table.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the underlying queries fail.
    pub async fn profile(&self, table: &str) -> Result<TableProfile, CatalogError> {
        let has_temporal_column = self.has_temporal_column(table).await?;
        let avg_row_bytes = self.avg_row_length(table).await?;
        let row_count = self.row_count(table).await?;

        debug!(table, row_count, avg_row_bytes, has_temporal_column, "profiled table");
        Ok(TableProfile::new(
            table,
            row_count,
            avg_row_bytes,
            has_temporal_column,
        ))
    }
}

/// Escapes a name for use inside backtick identifier quoting.
fn quote_ident(name: &str) -> String {
    name.replace('`', "``")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_plain() {
        assert_eq!(quote_ident("orders"), "orders");
    }

    #[test]
    fn test_quote_ident_escapes_backticks() {
        assert_eq!(quote_ident("odd`name"), "odd``name");
    }
}
