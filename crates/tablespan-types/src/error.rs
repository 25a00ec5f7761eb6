//! Error types shared across tablespan crates.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Error for invalid analysis windows.
///
/// A reversed window is a programming error on the caller's side, not
/// something valid external input can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Start instant is after the end instant.
    #[error("Invalid analysis window: {start} > {end}")]
    InvalidWindow {
        /// The start instant.
        start: NaiveDateTime,
        /// The end instant.
        end: NaiveDateTime,
    },
}
