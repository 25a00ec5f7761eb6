//! Calendar bucket generation for the tablespan storage estimator.
//!
//! This crate turns an analysis window into an ordered, gap-free,
//! non-overlapping sequence of [`TimeBucket`]s at a given
//! [`Granularity`]:
//!
//! - [`generate_buckets`] - Bucketing over raw instants, with validation
//! - [`window_buckets`] - Bucketing over an already-validated window
//!
//! [`TimeBucket`]: tablespan_types::TimeBucket
//! [`Granularity`]: tablespan_types::Granularity

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod generator;

pub use generator::{generate_buckets, window_buckets};
