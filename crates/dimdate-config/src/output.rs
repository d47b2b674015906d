//! Output configuration shared by the preview and export commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_preview_rows() -> usize {
    10
}

fn default_separator() -> String {
    String::from(",")
}

const fn default_quote_all() -> bool {
    true
}

fn default_file_name() -> String {
    String::from("dimdates.csv")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct OutputConfig {
    /// Rows shown by `dimdate preview`.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// CSV field separator.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Quote every CSV data value, not just those that need it.
    #[serde(default = "default_quote_all")]
    pub quote_all: bool,

    /// File written by `dimdate generate` when no `--output` is given.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            separator: default_separator(),
            quote_all: default_quote_all(),
            file_name: default_file_name(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() || self.separator.contains('"') {
            return Err(ConfigError::InvalidValue {
                field: "output.separator".into(),
                reason: format!("{:?} cannot separate CSV fields", self.separator),
            });
        }
        if self.preview_rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "output.preview_rows".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
