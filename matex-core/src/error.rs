//! Error types for MATEX.
//!
//! A single `thiserror` hierarchy shared by the upstream client, the
//! catalog, and the API layer. The API layer maps these onto HTTP statuses.

use thiserror::Error;

/// Result type alias using `MatexError`.
pub type Result<T> = std::result::Result<T, MatexError>;

/// Main error type for all MATEX operations.
#[derive(Debug, Error)]
pub enum MatexError {
    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION & CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Input validation failed (e.g. a search query below the minimum length).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error (e.g. missing API key).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM FAULTS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP transport failure talking to the upstream provider.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Upstream provider returned a non-success status.
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// No record exists for the requested material identifier.
    #[error("Material {0} not found")]
    MaterialNotFound(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MatexError {
    /// Returns true if this is an upstream fault (as opposed to bad input or
    /// bad configuration). Upstream faults are what the batch fetch skips
    /// and the search fallback absorbs.
    pub fn is_upstream_fault(&self) -> bool {
        matches!(
            self,
            MatexError::HttpError(_)
                | MatexError::UpstreamStatus { .. }
                | MatexError::JsonError(_)
        )
    }

    /// Returns true if this is a caller-input validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, MatexError::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatexError::UpstreamStatus {
            status: 503,
            body: "unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_error_classification() {
        assert!(MatexError::HttpError("timeout".into()).is_upstream_fault());
        assert!(!MatexError::ValidationError("short".into()).is_upstream_fault());
        assert!(MatexError::ValidationError("short".into()).is_validation_error());
        assert!(!MatexError::MaterialNotFound("mp-1".into()).is_upstream_fault());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(MatexError::from);
        assert!(matches!(result, Err(MatexError::JsonError(_))));
    }
}
