//! Error types for pagesweep

use thiserror::Error;

/// Result type alias using the pagesweep Error
pub type Result<T> = std::result::Result<T, Error>;

/// Pagesweep error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Worker index {index} out of range for {total} workers")]
    WorkerOutOfRange { index: usize, total: usize },

    #[error("Input source error: {0}")]
    InputSource(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Extraction failed for {url}: {reason}")]
    Extraction { url: String, reason: String },

    #[error("Operation timed out after {ms}ms")]
    Timeout { ms: u64 },

    #[error("Row width {got} does not match header width {expected}")]
    RowWidth { expected: usize, got: usize },

    #[error("Driver session error: {0}")]
    Session(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
