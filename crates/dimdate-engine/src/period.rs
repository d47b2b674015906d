//! Date arithmetic shared by the calendar and fiscal calculators.
//!
//! The helpers saturate instead of failing. Request validation keeps every
//! range inside years 1..=9998, and no period reaches further than a year
//! past either end, so saturation is never hit in practice.

use chrono::{Datelike, Days, Months, NaiveDate};

/// One calendar or fiscal period containing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// Position within the parent period (week of year, month 1-12,
    /// quarter 1-4), or the year number for year periods.
    pub index: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    #[must_use]
    pub const fn new(index: i32, start: NaiveDate, end: NaiveDate) -> Self {
        Self { index, start, end }
    }

    /// Number of days in the period.
    #[must_use]
    pub fn length(&self) -> u32 {
        days_between(self.start, self.end) + 1
    }

    /// 1-based position of `date` within the period.
    #[must_use]
    pub fn day_in(&self, date: NaiveDate) -> u32 {
        days_between(self.start, date) + 1
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Widen a 1-based position into a [`Period::index`].
pub(crate) fn index_of(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Whole days from `start` to `end`, zero if `end` precedes `start`.
pub(crate) fn days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    u32::try_from((end - start).num_days()).unwrap_or(0)
}

/// Build a date that exists in every year: a month start, January 1 or
/// December 31.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let date = NaiveDate::from_ymd_opt(year, month, day);
    debug_assert!(date.is_some(), "{year}-{month:02}-{day:02} is not a date");
    date.unwrap_or(NaiveDate::MAX)
}

pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

pub(crate) fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

pub(crate) fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

pub(crate) fn sub_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// The day before `date`.
pub(crate) fn pred(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// First and last day of the calendar month containing `date`.
pub(crate) fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = ymd(date.year(), date.month(), 1);
    (start, pred(add_months(start, 1)))
}
