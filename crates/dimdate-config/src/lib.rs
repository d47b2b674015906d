//! # dimdate-config
//!
//! Layered configuration loading for Dimdate using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DIMDATE_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `dimdate.toml` in the working directory
//! 4. User-level `~/.config/dimdate/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DIMDATE_RANGE__START` -> `range.start`,
//! `DIMDATE_FIELDS__CALENDARWEEK__ACTIVE` -> `fields.calendarweek.active`.
//! Field keys match case-insensitively, so the lowercased env form works.
//!
//! # Usage
//!
//! ```no_run
//! use dimdate_config::DimdateConfig;
//!
//! let config = DimdateConfig::load_with_dotenv(None).expect("config");
//! let request = config.to_request().expect("valid request");
//! println!("{} days", request.range.day_count());
//! ```

mod error;
mod fields;
mod fiscal;
mod output;
mod range;

pub use error::ConfigError;
pub use fields::{GroupsConfig, IdsConfig, build_registry};
pub use fiscal::FiscalConfig;
pub use output::OutputConfig;
pub use range::RangeConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dimdate_core::{FieldOverride, GenerationOptions, GenerationRequest};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Project-level config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "dimdate.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct DimdateConfig {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub fiscal: FiscalConfig,
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub groups: GroupsConfig,
    /// Per-field overrides keyed by field key, e.g. `calendarWeekStartDate`.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldOverride>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DimdateConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit)?
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration after reading the nearest `.env` file.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top. Fails only when `explicit` names a file that does not exist.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed("DIMDATE_").split("__")))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dimdate").join("config.toml"))
    }

    /// Turn the loaded values into a validated generation request.
    pub fn to_request(&self) -> Result<GenerationRequest, ConfigError> {
        let registry = build_registry(&self.ids, &self.groups, &self.fields)?;
        let request = GenerationRequest::new(
            registry,
            self.range.to_range()?,
            self.fiscal.anchor()?,
        )
        .with_week_policy(self.fiscal.week_policy())
        .with_quarter_pattern(self.fiscal.quarter_pattern);

        request.validate()?;
        self.output.validate()?;
        Ok(request)
    }

    /// Options for a preview of `rows` rows, or the configured default.
    pub fn preview_options(&self, rows: Option<usize>) -> GenerationOptions {
        GenerationOptions::preview(rows.unwrap_or(self.output.preview_rows))
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// JSON Schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Self)
    }

    /// Load `.env` from the nearest ancestor directory that has one.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` when set (tests), otherwise lets
    /// `dotenvy` search from the current directory. Missing files are not an
    /// error.
    fn load_dotenv() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
