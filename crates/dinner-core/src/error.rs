//! Error types for running dinner core records and configuration.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while validating configuration or participant lists.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("duplicate participant number: {0}")]
    DuplicateParticipant(u32),
}
