//! MySQL metadata client for tablespan.
//!
//! This crate is the external collaborator that supplies
//! [`TableProfile`]s to the estimation core:
//!
//! - [`CatalogConfig`] - Explicit connection settings (host, user,
//!   password, database, port, timeouts)
//! - [`CatalogClient`] - Pooled `information_schema` queries
//! - [`CatalogError`] - Connection and query failures
//!
//! [`TableProfile`]: tablespan_types::TableProfile

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;

pub use client::{CatalogClient, CatalogError};
pub use config::CatalogConfig;
