//! Error types for catalog loading, configuration and query decoding.
//!
//! The query path itself never fails: filtering and the chart builders always
//! produce a (possibly empty) result. These errors only surface at the
//! boundaries where external input enters the engine.

/// Result type for engine boundary operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine boundary operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for EngineError {
    fn from(s: String) -> Self {
        EngineError::Internal(s)
    }
}

impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        EngineError::Internal(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidQuery("unknown orbit selector 'XEO'".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid query: unknown orbit selector 'XEO'"
        );
    }

    #[test]
    fn test_from_str_maps_to_internal() {
        let err: EngineError = "boom".into();
        assert!(matches!(err, EngineError::Internal(ref m) if m == "boom"));
    }
}
