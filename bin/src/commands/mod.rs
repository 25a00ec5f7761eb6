//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod empty_tables;
pub(crate) mod list;
pub(crate) mod summarize;
