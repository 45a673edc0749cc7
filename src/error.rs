//! Error types for shop_stock_sync

use thiserror::Error;

/// Unified error type for shop_stock_sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// Kept apart from `HttpStatus` so a row's reason shows whether the store
    /// answered at all: transport failures read `Network error: ...`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Remote system answered with a non-2xx status
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// No catalog variant carries the SKU
    #[error("No product found")]
    NotFound(String),
    /// A quantity or identifier could not be coerced to an integer
    #[error("Validation error: {0}")]
    Validation(String),
    /// An update task panicked or could not run
    #[error("Error: {0}")]
    Task(String),
    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),
    /// The input file does not have a recognised layout
    #[error("Input format error: {0}")]
    InputFormat(String),
    /// CSV reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for shop_stock_sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reads_like_a_row_reason() {
        let err = SyncError::NotFound("ZZZ999".to_string());
        assert_eq!(err.to_string(), "No product found");
    }

    #[test]
    fn http_status_includes_code() {
        let err = SyncError::HttpStatus(reqwest::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "HTTP error: 422 Unprocessable Entity");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = SyncError::Validation("quantity 'abc' is not an integer".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: quantity 'abc' is not an integer"
        );
    }
}
