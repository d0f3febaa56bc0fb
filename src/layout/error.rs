//! Error types for layout configuration
//!
//! Inference itself never fails; only loading its tolerances can.

use thiserror::Error;

/// Errors that can occur when loading or validating a [`super::LayoutConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse layout config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value outside the range the heuristics can work with
    #[error("invalid layout config value '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
