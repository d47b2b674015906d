//! Fiscal calendar settings: the year anchor, the week policy, and the
//! quarter pattern.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Month and day on which every fiscal year begins.
///
/// Deserialization does not validate; [`FiscalAnchor::validate`] runs again
/// when a generation request is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FiscalAnchor {
    month: u32,
    day: u32,
}

impl FiscalAnchor {
    /// Validate and build an anchor.
    ///
    /// The month/day must exist in every year, so February 29 is rejected
    /// along with impossible dates such as April 31.
    pub fn new(month: u32, day: u32) -> Result<Self, ConfigurationError> {
        // 2001 is a common year.
        NaiveDate::from_ymd_opt(2001, month, day)
            .map(|_| Self { month, day })
            .ok_or(ConfigurationError::InvalidAnchor { month, day })
    }

    /// Re-check an anchor that may have been deserialized.
    pub fn validate(self) -> Result<(), ConfigurationError> {
        Self::new(self.month, self.day).map(|_| ())
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    /// The anchor's date in `year`, `None` only outside chrono's year range.
    #[must_use]
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl Default for FiscalAnchor {
    /// July 1.
    fn default() -> Self {
        Self { month: 7, day: 1 }
    }
}

impl fmt::Display for FiscalAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

// ---------------------------------------------------------------------------
// Weeks
// ---------------------------------------------------------------------------

/// First day of a fiscal week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// How fiscal weeks are cut.
///
/// With partial weeks allowed, week 1 starts on the fiscal-year start and the
/// last week ends on the fiscal-year end, so the first and last weeks may be
/// short. Without them every week is seven days starting on `week_start`;
/// week 1 is the week containing the fiscal-year start and a year may reach
/// week 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FiscalWeekPolicy {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_allow_partial_weeks")]
    pub allow_partial_weeks: bool,
}

const fn default_allow_partial_weeks() -> bool {
    true
}

impl Default for FiscalWeekPolicy {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            allow_partial_weeks: default_allow_partial_weeks(),
        }
    }
}

/// Week split of a fiscal quarter.
///
/// Accepted for configuration compatibility; fiscal quarters are always
/// computed as three calendar-month spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum QuarterPattern {
    #[default]
    #[serde(rename = "months")]
    Months,
    #[serde(rename = "4-4-5")]
    FourFourFive,
    #[serde(rename = "4-5-4")]
    FourFiveFour,
    #[serde(rename = "5-4-4")]
    FiveFourFour,
}

impl QuarterPattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Months => "months",
            Self::FourFourFive => "4-4-5",
            Self::FourFiveFour => "4-5-4",
            Self::FiveFourFour => "5-4-4",
        }
    }
}

impl fmt::Display for QuarterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
