//! Storage-distribution estimation for tables without a temporal column.
//!
//! This is a facade crate that re-exports functionality from the
//! tablespan workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tablespan_lib::prelude::*;
//! use chrono::NaiveDate;
//!
//! let window = AnalysisWindow::from_dates(
//!     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! )?;
//!
//! let profiles = [TableProfile::new("metrics_raw", 1_048_576, 1.0, false)];
//! let document = run_analysis(profiles, &window);
//! assert_eq!(document.estimated_count(), 1);
//! # Ok::<(), tablespan_types::WindowError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tablespan/tablespan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tablespan_types::*;

// Re-export bucket generation
pub use tablespan_buckets::{generate_buckets, window_buckets};

// Re-export estimation and classification
pub use tablespan_estimate::{TableClass, classify, estimate_usage};

// Re-export report assembly and documents
pub use tablespan_report::{
    AnalysisResult, ReportError, SummaryTable, TableResult, aggregate, default_output_path,
    read_document, run_analysis, write_document, write_document_file,
};

// Re-export the catalog client
#[cfg(feature = "catalog")]
pub use tablespan_catalog::{CatalogClient, CatalogConfig, CatalogError};

/// Commonly used items, re-exported in one place.
pub mod prelude {
    pub use tablespan_buckets::{generate_buckets, window_buckets};
    pub use tablespan_estimate::{TableClass, classify, estimate_usage};
    pub use tablespan_report::{
        AnalysisResult, SummaryTable, TableResult, aggregate, run_analysis,
    };
    pub use tablespan_types::{
        AnalysisWindow, Granularity, TableProfile, TimeBucket, UsageEstimateMap, WindowError,
        format_mb, parse_mb,
    };

    #[cfg(feature = "catalog")]
    pub use tablespan_catalog::{CatalogClient, CatalogConfig, CatalogError};
}
