//! Usage estimation and table eligibility for tablespan.
//!
//! This crate holds the two decision points of an analysis run:
//!
//! - [`estimate_usage`] - Splits a table's total size evenly across a
//!   bucket sequence
//! - [`classify`] / [`TableClass`] - Decides whether a table can be
//!   estimated at all

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classifier;
mod estimator;

pub use classifier::{TableClass, classify};
pub use estimator::estimate_usage;
