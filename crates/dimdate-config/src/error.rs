//! Configuration error types.

use std::path::PathBuf;

use dimdate_core::{ConfigurationError, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// The loaded values do not form a valid generation request.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A configuration file named explicitly does not exist.
    #[error("Configuration file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// The effective configuration could not be rendered back to TOML.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

impl From<ConfigurationError> for ConfigError {
    fn from(error: ConfigurationError) -> Self {
        Self::Core(CoreError::Configuration(error))
    }
}
