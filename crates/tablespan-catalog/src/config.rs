//! Catalog connection configuration.

use std::time::Duration;

/// Connection settings for the metadata client.
///
/// This is an explicit value passed into [`CatalogClient::connect`];
/// nothing here is ever collected interactively inside library code.
///
/// [`CatalogClient::connect`]: crate::CatalogClient::connect
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
    /// Schema to analyze.
    pub database: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,
    /// Server-side cap on a single statement's execution time.
    pub statement_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: String::new(),
            max_connections: 4,
            connect_timeout: Duration::from_secs(60),
            statement_timeout: Duration::from_secs(300),
        }
    }
}
