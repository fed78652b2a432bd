//! Error types for the wait estimator
//!
//! Typed failures live in [`EstimatorError`]; plumbing code (config loading,
//! snapshot providers, the CLI) works in `anyhow` through the [`Result`] alias.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific estimation scenarios
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("No item sequence supplied to {operation}")]
    MissingItems { operation: &'static str },

    #[error("Invalid penalty {value}: must be finite and non-negative")]
    InvalidPenalty { value: f64 },

    #[error("Invalid menu snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("Menu snapshot unavailable from {source_name}: {reason}")]
    SnapshotUnavailable { source_name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
