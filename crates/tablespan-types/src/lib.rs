//! Core types for the tablespan storage estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! tablespan:
//!
//! - [`TimeBucket`] - A labeled half-open calendar interval
//! - [`AnalysisWindow`] - The date range an analysis run covers
//! - [`Granularity`] - Bucket size unit (week, month, year)
//! - [`TableProfile`] - Per-table facts needed for estimation
//! - [`format_mb`] / [`parse_mb`] - The report's megabyte string format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod error;
mod format;
mod granularity;
mod profile;
mod window;

pub use bucket::{TimeBucket, UsageEstimateMap};
pub use error::WindowError;
pub use format::{format_mb, parse_mb};
pub use granularity::{Granularity, GranularityParseError};
pub use profile::TableProfile;
pub use window::AnalysisWindow;
