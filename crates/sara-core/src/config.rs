//! Form configuration: error messages and the password minimum.
//!
//! Configuration is layered with the `config` crate:
//!
//! 1. Built-in defaults (the Portuguese messages shown by the app)
//! 2. An optional TOML file, by default `<config dir>/sara/forms.toml`
//! 3. Environment variables prefixed with `SARA_`, nested keys separated by
//!    `__` (e.g. `SARA_MIN_PASSWORD_LENGTH=10`,
//!    `SARA_MESSAGES__INVALID_CPF="CPF inválido"`)
//!
//! The result is validated before it is handed out.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::validation::MIN_PASSWORD_LENGTH;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "SARA";

/// Upper bound for [`FormConfig::min_password_length`].
pub const MAX_PASSWORD_MINIMUM: usize = 128;

/// Placeholder replaced with the password minimum in
/// [`FormMessages::password_too_short`].
pub const MIN_PLACEHOLDER: &str = "{min}";

/// Errors raised while loading, validating, or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// The layered sources could not be read or merged.
    #[error("Failed to load configuration: {0}")]
    ParseError(#[from] config::ConfigError),

    /// Serializing the configuration to TOML failed.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Writing the configuration file failed.
    #[error("Failed to write {path}: {source}")]
    WriteError {
        /// Target path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A single field holds an invalid value.
    #[error("Invalid value for '{field}': {message}")]
    ValidationError {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// More than one field failed validation.
    #[error("{} configuration errors", .0.len())]
    MultipleValidationErrors(Vec<ConfigError>),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// User-facing messages for each failed form rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    /// Name left blank.
    pub name_required: String,
    /// Email left blank.
    pub email_required: String,
    /// Email fails the shape check.
    pub invalid_email: String,
    /// CPF fails the checksum.
    pub invalid_cpf: String,
    /// Phone left blank.
    pub phone_required: String,
    /// Address left blank.
    pub address_required: String,
    /// Password shorter than the minimum. `{min}` is replaced with the minimum.
    pub password_too_short: String,
    /// Password confirmation differs from the password.
    pub password_mismatch: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_required: "Nome é obrigatório".to_string(),
            email_required: "Email é obrigatório".to_string(),
            invalid_email: "Email inválido".to_string(),
            invalid_cpf: "CPF inválido".to_string(),
            phone_required: "Telefone é obrigatório".to_string(),
            address_required: "Endereço é obrigatório".to_string(),
            password_too_short: format!("Senha deve ter pelo menos {MIN_PLACEHOLDER} caracteres"),
            password_mismatch: "Senhas não coincidem".to_string(),
        }
    }
}

impl FormMessages {
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("name_required", &self.name_required),
            ("email_required", &self.email_required),
            ("invalid_email", &self.invalid_email),
            ("invalid_cpf", &self.invalid_cpf),
            ("phone_required", &self.phone_required),
            ("address_required", &self.address_required),
            ("password_too_short", &self.password_too_short),
            ("password_mismatch", &self.password_mismatch),
        ]
    }
}

/// Configuration consumed by the form rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum password length for login and registration.
    pub min_password_length: usize,

    /// Messages shown next to failing fields.
    pub messages: FormMessages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
            messages: FormMessages::default(),
        }
    }
}

impl FormConfig {
    /// Loads configuration from the default path (if it exists) and the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the merged result is
    /// invalid.
    pub fn load() -> ConfigResult<Self> {
        let path = default_config_path().filter(|p| p.exists());
        Self::load_with(path.as_deref(), None)
    }

    /// Loads configuration from `path` and the process environment.
    ///
    /// Unlike [`FormConfig::load`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `path` does not exist, or any
    /// parse or validation error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        Self::load_with(Some(path), None)
    }

    /// Loads configuration from an optional file and an environment map.
    ///
    /// When `env` is `None` the process environment is read.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the merged result is
    /// invalid.
    pub fn load_with(path: Option<&Path>, env: Option<HashMap<String, String>>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "loading form config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field, collecting all problems.
    ///
    /// # Errors
    ///
    /// Returns a single [`ConfigError::ValidationError`] or
    /// [`ConfigError::MultipleValidationErrors`].
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        if !(1..=MAX_PASSWORD_MINIMUM).contains(&self.min_password_length) {
            errors.push(ConfigError::ValidationError {
                field: "min_password_length".to_string(),
                message: format!(
                    "must be between 1 and {MAX_PASSWORD_MINIMUM} (got {})",
                    self.min_password_length
                ),
            });
        }

        for (name, message) in self.messages.entries() {
            if message.trim().is_empty() {
                errors.push(ConfigError::ValidationError {
                    field: format!("messages.{name}"),
                    message: "must not be empty".to_string(),
                });
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }

    /// The password-too-short message with the minimum filled in.
    #[must_use]
    pub fn password_too_short_message(&self) -> String {
        self.messages
            .password_too_short
            .replace(MIN_PLACEHOLDER, &self.min_password_length.to_string())
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration as TOML to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let write_error = |source| ConfigError::WriteError {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(write_error)?;
        Ok(())
    }
}

/// Default location of the config file, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "sara").map(|dirs| dirs.config_dir().join("forms.toml"))
}
