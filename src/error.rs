//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid K-factor: {value} (must be positive and finite)")]
    InvalidKFactor { value: f64 },

    #[error("Invalid default rating: {value} (must be finite)")]
    InvalidDefaultRating { value: f64 },

    #[error("Match log is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Unrecognized outcome code: {code}")]
    UnknownOutcome { code: String },

    #[error("Failed to read match log: {message}")]
    InputFailed { message: String },

    #[error("Failed to persist ratings: {message}")]
    OutputFailed { message: String },
}
