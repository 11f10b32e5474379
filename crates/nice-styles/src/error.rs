//! Error types for the nice-styles crate.

use thiserror::Error;

use crate::value::StyleValue;

/// Errors raised while normalizing a style tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A value whose shape matches none of the recognized cases.
    ///
    /// `label` is the caller-supplied error label (empty inside nested
    /// blocks), `value` is the JSON serialization of the offending value.
    #[error("{label}: Invalid style value for {key}: {value}")]
    InvalidValue {
        label: String,
        key: String,
        value: String,
    },
}

impl StyleError {
    pub(crate) fn invalid_value(label: &str, key: &str, value: &StyleValue) -> Self {
        log::debug!("invalid {} style value for {}", value.kind(), key);
        StyleError::InvalidValue {
            label: label.to_string(),
            key: key.to_string(),
            value: value.to_json().to_string(),
        }
    }

    /// Returns the property key that failed.
    pub fn key(&self) -> &str {
        match self {
            StyleError::InvalidValue { key, .. } => key,
        }
    }

    /// Returns the label supplied by the caller of the failing call.
    pub fn label(&self) -> &str {
        match self {
            StyleError::InvalidValue { label, .. } => label,
        }
    }
}

/// Errors raised while loading [`Rules`](crate::Rules) from text.
#[derive(Debug, Error)]
pub enum RulesError {
    /// YAML parse error.
    #[error("failed to parse rules YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse error.
    #[error("failed to parse rules JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, StyleError>;
