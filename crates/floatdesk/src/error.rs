//! Error types for configuration input
//!
//! Geometry never fails; only host-supplied configuration can be rejected.

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input was not valid JSON for the expected shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field held a value outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
