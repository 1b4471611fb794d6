//! Unified error type for the SARA form library.
//!
//! Validators and maskers never fail, so errors only come from the layers
//! around them: loading configuration and reading form documents handed in
//! from outside. [`SaraError`] covers those failure modes; the config module
//! keeps its own [`ConfigError`](crate::config::ConfigError) and converts
//! into this type.
//!
//! # Example
//!
//! ```rust
//! use sara_core::error::{Result, SaraError};
//!
//! fn parse_kind(name: &str) -> Result<sara_core::FieldKind> {
//!     Ok(name.parse()?)
//! }
//!
//! assert!(matches!(parse_kind("rg"), Err(SaraError::UnknownFieldKind(_))));
//! ```

use thiserror::Error;

/// The unified error type for SARA operations.
#[derive(Debug, Error)]
pub enum SaraError {
    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================
    /// The configuration file was not found at the requested path.
    #[error("Configuration file not found at: {0}")]
    ConfigNotFound(String),

    /// The configuration sources could not be parsed or merged.
    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(String),

    /// The configuration was parsed but contains invalid values.
    #[error("Configuration validation failed: {0}")]
    ConfigValidationError(String),

    // =========================================================================
    // INPUT ERRORS
    // =========================================================================
    /// A form document could not be decoded.
    #[error("Invalid form document: {0}")]
    InvalidFormDocument(String),

    /// The requested form does not exist.
    #[error("Unknown form: '{0}'. Expected one of: login, register, profile, add-friend.")]
    UnknownForm(String),

    /// The requested field kind does not exist.
    #[error("{0}")]
    UnknownFieldKind(#[from] crate::types::UnknownFieldKind),

    // =========================================================================
    // I/O ERRORS
    // =========================================================================
    /// Writing configuration or reading input failed.
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// A low-level I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized [`Result`] type for SARA operations.
pub type Result<T> = std::result::Result<T, SaraError>;

impl SaraError {
    /// Returns `true` if this error is related to configuration.
    #[inline]
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound(_) | Self::ConfigParseError(_) | Self::ConfigValidationError(_)
        )
    }

    /// Returns `true` if this error was caused by the caller's input.
    #[inline]
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormDocument(_) | Self::UnknownForm(_) | Self::UnknownFieldKind(_)
        )
    }

    /// Returns `true` if this error is related to I/O or persistence.
    #[inline]
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::PersistenceError(_) | Self::IoError(_))
    }

    /// Returns a machine-readable error code.
    #[inline]
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound(_) => "CONFIG_NOT_FOUND",
            Self::ConfigParseError(_) => "CONFIG_PARSE_ERROR",
            Self::ConfigValidationError(_) => "CONFIG_VALIDATION_ERROR",
            Self::InvalidFormDocument(_) => "INVALID_FORM_DOCUMENT",
            Self::UnknownForm(_) => "UNKNOWN_FORM",
            Self::UnknownFieldKind(_) => "UNKNOWN_FIELD_KIND",
            Self::PersistenceError(_) => "PERSISTENCE_ERROR",
            Self::IoError(_) => "IO_ERROR",
        }
    }
}

// =============================================================================
// CONVERSIONS FROM MODULE-SPECIFIC ERRORS
// =============================================================================

impl From<crate::config::ConfigError> for SaraError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::NotFound(path) => Self::ConfigNotFound(path),
            ConfigError::ParseError(e) => Self::ConfigParseError(e.to_string()),
            ConfigError::SerializeError(e) => Self::ConfigParseError(e.to_string()),
            ConfigError::WriteError { path, source } => {
                Self::PersistenceError(format!("Failed to write {path}: {source}"))
            }
            ConfigError::ValidationError { field, message } => {
                Self::ConfigValidationError(format!("{field}: {message}"))
            }
            ConfigError::MultipleValidationErrors(errors) => {
                let messages: Vec<String> = errors.into_iter().map(|e| e.to_string()).collect();
                Self::ConfigValidationError(messages.join("; "))
            }
        }
    }
}

impl From<serde_json::Error> for SaraError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::PersistenceError(err.to_string())
        } else {
            Self::InvalidFormDocument(err.to_string())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::io::{Error as IoErr, ErrorKind};

    #[test]
    fn test_config_error_classification() {
        assert!(SaraError::ConfigNotFound("/test".into()).is_config_error());
        assert!(SaraError::ConfigParseError("syntax error".into()).is_config_error());
        assert!(SaraError::ConfigValidationError("invalid value".into()).is_config_error());

        assert!(!SaraError::UnknownForm("signup".into()).is_config_error());
    }

    #[test]
    fn test_input_error_classification() {
        assert!(SaraError::InvalidFormDocument("eof".into()).is_input_error());
        assert!(SaraError::UnknownForm("signup".into()).is_input_error());
        let kind_err = "rg".parse::<crate::FieldKind>().unwrap_err();
        assert!(SaraError::from(kind_err).is_input_error());

        assert!(!SaraError::ConfigNotFound("/test".into()).is_input_error());
    }

    #[test]
    fn test_io_error_classification() {
        assert!(SaraError::PersistenceError("disk full".into()).is_io_error());
        assert!(SaraError::IoError(IoErr::new(ErrorKind::NotFound, "test")).is_io_error());

        assert!(!SaraError::UnknownForm("x".into()).is_io_error());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SaraError::ConfigNotFound(String::new()).error_code(), "CONFIG_NOT_FOUND");
        assert_eq!(SaraError::UnknownForm(String::new()).error_code(), "UNKNOWN_FORM");
        assert_eq!(
            SaraError::InvalidFormDocument(String::new()).error_code(),
            "INVALID_FORM_DOCUMENT"
        );
    }

    #[test]
    fn test_from_config_validation_errors() {
        let err: SaraError = ConfigError::MultipleValidationErrors(vec![
            ConfigError::ValidationError {
                field: "a".into(),
                message: "bad".into(),
            },
            ConfigError::ValidationError {
                field: "b".into(),
                message: "worse".into(),
            },
        ])
        .into();

        assert!(err.is_config_error());
        let text = err.to_string();
        assert!(text.contains("'a': bad"));
        assert!(text.contains("'b': worse"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SaraError = json_err.into();
        assert!(matches!(err, SaraError::InvalidFormDocument(_)));
    }

    #[test]
    fn test_from_io_error() {
        let err: SaraError = IoErr::new(ErrorKind::NotFound, "file not found").into();
        assert!(matches!(err, SaraError::IoError(_)));
        assert!(err.is_io_error());
    }

    #[test]
    fn test_error_display_messages() {
        let err = SaraError::UnknownForm("signup".into());
        assert!(err.to_string().contains("'signup'"));
        assert!(err.to_string().contains("login, register, profile, add-friend"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SaraError>();
        assert_sync::<SaraError>();
    }
}
