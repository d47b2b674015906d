//! Calendar periods: ISO week, month, quarter, and year.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::period::{Period, add_days, add_months, index_of, month_bounds, pred, sub_days, ymd};

/// The calendar periods containing one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarAttributes {
    pub date: NaiveDate,
    /// ISO week, Monday to Sunday; `index` is the ISO week number.
    pub week: Period,
    pub month: Period,
    pub quarter: Period,
    /// `index` is the calendar year.
    pub year: Period,
}

impl CalendarAttributes {
    /// Compute every calendar period of `date`. Depends on nothing else.
    #[must_use]
    pub fn compute(date: NaiveDate) -> Self {
        let week_start = sub_days(date, date.weekday().num_days_from_monday());
        let week = Period::new(
            index_of(date.iso_week().week()),
            week_start,
            add_days(week_start, 6),
        );

        let (month_start, month_end) = month_bounds(date);
        let month = Period::new(index_of(date.month()), month_start, month_end);

        let quarter_number = (date.month() - 1) / 3 + 1;
        let quarter_start = ymd(date.year(), (quarter_number - 1) * 3 + 1, 1);
        let quarter = Period::new(
            index_of(quarter_number),
            quarter_start,
            pred(add_months(quarter_start, 3)),
        );

        let year = Period::new(
            date.year(),
            ymd(date.year(), 1, 1),
            ymd(date.year(), 12, 31),
        );

        Self {
            date,
            week,
            month,
            quarter,
            year,
        }
    }

    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// Monday is 1, Sunday is 7.
    #[must_use]
    pub fn day_in_week(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.year.length() == 366
    }
}
