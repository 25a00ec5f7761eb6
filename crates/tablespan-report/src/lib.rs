//! Result aggregation and output documents for tablespan.
//!
//! This crate is the assembly stage between per-table estimation and
//! serialization:
//!
//! - [`aggregate`] - Builds a [`TableResult`] for one eligible table
//! - [`AnalysisResult`] - The full document, with its `skipped` side-channel
//! - [`run_analysis`] - Classifies and aggregates a batch of profiles
//! - [`write_document`] / [`read_document`] - JSON persistence
//! - [`SummaryTable`] - The flattened per-table CSV summary

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod document;
mod summary;

pub use aggregator::{AnalysisResult, TableResult, aggregate, run_analysis};
pub use document::{
    ReportError, default_output_path, read_document, write_document, write_document_file,
};
pub use summary::SummaryTable;
