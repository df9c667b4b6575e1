//! Pagesweep Common Library
//!
//! Shared types, configuration and errors for the pagesweep suite.

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{InputSettings, OutputSettings, SweepConfig, TimeoutSettings, WorkerSettings};
pub use error::{Error, Result};
pub use types::{PageFields, ResultTable, RowGroup, Verdict};

/// Pagesweep version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cell value written in place of data that could not be extracted
pub const ERROR_CELL: &str = "Error";

/// Verdict reason recorded when a URL fails during processing
pub const PROCESSING_ERROR_REASON: &str = "Processing error";
