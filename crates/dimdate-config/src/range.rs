//! Date range configuration.

use chrono::NaiveDate;
use dimdate_core::DateRange;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// First date generated by default.
fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1999, 6, 28).unwrap_or_default()
}

/// Last date generated by default.
fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2049, 12, 31).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct RangeConfig {
    /// First date, inclusive (`YYYY-MM-DD`).
    #[serde(default = "default_start")]
    pub start: NaiveDate,

    /// Last date, inclusive (`YYYY-MM-DD`).
    #[serde(default = "default_end")]
    pub end: NaiveDate,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

impl RangeConfig {
    pub fn to_range(&self) -> Result<DateRange, ConfigError> {
        Ok(DateRange::new(self.start, self.end)?)
    }
}
