//! Export error types.

/// Errors raised while serializing a generated table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing to the destination failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The separator is empty or contains a quote.
    #[error("Invalid CSV separator {separator:?}")]
    InvalidSeparator {
        /// The rejected separator.
        separator: String,
    },
}
