//! Error types for tcgsearch-config

use thiserror::Error;

/// Error codes for configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    /// File not found
    FileNotFound,
    /// Invalid YAML format
    InvalidYaml,
    /// Missing required field
    MissingField,
    /// Invalid field value
    InvalidValue,
    /// IO error
    IoError,
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ConfigErrorCode::InvalidYaml => write!(f, "INVALID_YAML"),
            ConfigErrorCode::MissingField => write!(f, "MISSING_FIELD"),
            ConfigErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
            ConfigErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Detailed error information shown at startup
#[derive(Debug, Clone)]
pub struct ConfigErrorDetails {
    /// Error code
    pub code: ConfigErrorCode,
    /// Human-readable message
    pub message: String,
    /// Field path (for field-specific errors)
    pub field: Option<String>,
    /// Suggestions for resolution
    pub suggestions: Vec<String>,
}

impl ConfigErrorDetails {
    /// Create a new error detail
    pub fn new(code: ConfigErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            field: None,
            suggestions: vec![],
        }
    }

    /// Add field information
    pub fn with_field(mut self, field: String) -> Self {
        self.field = Some(field);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ConfigErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref field) = self.field {
            write!(f, "\nField: {}", field)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("IO error occurred")]
    IoError,
}

impl ConfigError {
    /// Get the error code
    pub fn code(&self) -> ConfigErrorCode {
        match self {
            ConfigError::FileNotFound { .. } => ConfigErrorCode::FileNotFound,
            ConfigError::InvalidYaml { .. } => ConfigErrorCode::InvalidYaml,
            ConfigError::MissingField { .. } => ConfigErrorCode::MissingField,
            ConfigError::InvalidValue { .. } => ConfigErrorCode::InvalidValue,
            ConfigError::IoError => ConfigErrorCode::IoError,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ConfigErrorDetails {
        let mut details = ConfigErrorDetails::new(self.code(), self.to_string());

        match self {
            ConfigError::FileNotFound { .. } => {
                details = details.with_suggestion(
                    "Use --config flag to specify the config file path.".to_string(),
                );
                details = details.with_suggestion(
                    "Run with --print-config to get a starting template.".to_string(),
                );
            }
            ConfigError::MissingField { field } => {
                details = details.with_field(field.clone());
                if field == "upstream.api_key" {
                    details = details.with_suggestion(format!(
                        "Set the {} environment variable.",
                        crate::API_KEY_ENV
                    ));
                }
                details = details
                    .with_suggestion(format!("Add the '{}' field to your config file.", field));
            }
            ConfigError::InvalidValue { field, reason } => {
                details = details.with_field(field.clone());
                details = details.with_suggestion(reason.clone());
            }
            _ => {}
        }

        details
    }
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_details() {
        let err = ConfigError::MissingField {
            field: "upstream.api_key".to_string(),
        };
        let details = err.to_details();
        assert_eq!(details.code, ConfigErrorCode::MissingField);
        assert_eq!(details.field.as_deref(), Some("upstream.api_key"));
        assert!(details.to_string().contains("JUSTTCG_API_KEY"));
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ConfigErrorCode::InvalidYaml.to_string(), "INVALID_YAML");
        assert_eq!(ConfigError::IoError.code().to_string(), "IO_ERROR");
    }
}
