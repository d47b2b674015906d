//! Fiscal calendar configuration.

use dimdate_core::{FiscalAnchor, FiscalWeekPolicy, QuarterPattern, WeekStart};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_start_month() -> u32 {
    7
}

const fn default_start_day() -> u32 {
    1
}

const fn default_allow_partial_weeks() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct FiscalConfig {
    /// Month the fiscal year starts in (1-12).
    #[serde(default = "default_start_month")]
    pub start_month: u32,

    /// Day of `start_month` the fiscal year starts on.
    #[serde(default = "default_start_day")]
    pub start_day: u32,

    /// First day of a fiscal week.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Clip the first and last fiscal weeks to the fiscal year.
    #[serde(default = "default_allow_partial_weeks")]
    pub allow_partial_weeks: bool,

    /// Accepted but not applied: fiscal quarters are three calendar months.
    #[serde(default)]
    pub quarter_pattern: QuarterPattern,
}

impl Default for FiscalConfig {
    fn default() -> Self {
        Self {
            start_month: default_start_month(),
            start_day: default_start_day(),
            week_start: WeekStart::default(),
            allow_partial_weeks: default_allow_partial_weeks(),
            quarter_pattern: QuarterPattern::default(),
        }
    }
}

impl FiscalConfig {
    pub fn anchor(&self) -> Result<FiscalAnchor, ConfigError> {
        Ok(FiscalAnchor::new(self.start_month, self.start_day)?)
    }

    pub const fn week_policy(&self) -> FiscalWeekPolicy {
        FiscalWeekPolicy {
            week_start: self.week_start,
            allow_partial_weeks: self.allow_partial_weeks,
        }
    }
}
