use chrono::{Datelike, Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Earliest year a range may touch. Semantic ids are `YYYYMMDD`.
pub const MIN_YEAR: i32 = 1;
/// Latest year a range may touch.
pub const MAX_YEAR: i32 = 9998;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigurationError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// `start <= end`, and both ends inside [`MIN_YEAR`]..=[`MAX_YEAR`].
    ///
    /// The year bound leaves room for period boundaries a year either side
    /// of the range, which is as far as any period reaches.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for date in [self.start, self.end] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
                return Err(ConfigurationError::YearOutOfRange {
                    date,
                    min: MIN_YEAR,
                    max: MAX_YEAR,
                });
            }
        }
        if self.start > self.end {
            return Err(ConfigurationError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of dates in the range, both ends included.
    #[must_use]
    pub fn day_count(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    /// The date `offset` days after the start, if it is still in range.
    #[must_use]
    pub fn nth(&self, offset: usize) -> Option<NaiveDate> {
        let offset = u64::try_from(offset).ok()?;
        self.start
            .checked_add_days(Days::new(offset))
            .filter(|date| *date <= self.end)
    }
}
