//! Error types for clarity-l10n

use thiserror::Error;

/// Errors that can occur while loading a message bundle
#[derive(Debug, Error)]
pub enum L10nError {
    #[error("Failed to read bundle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed bundle file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Bundle file is not a flat string map")]
    NotAStringMap,
}

/// Result type for bundle operations
pub type L10nResult<T> = Result<T, L10nError>;
