//! Error types for the traffic analyzer

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A congestion source could not produce a valid batch
    #[error("Generation error: {0}")]
    Generation(String),

    /// Marker payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the map artifact failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
