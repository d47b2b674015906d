//! Fiscal periods relative to an arbitrary year anchor.
//!
//! A fiscal year starts on the anchor's month/day and ends the day before
//! the next occurrence. It is labelled with the calendar year in which it
//! starts. Fiscal months are calendar months numbered from the anchor month;
//! fiscal quarters are the four three-month spans counted from the fiscal
//! year start.

use chrono::{Datelike, NaiveDate, Weekday};
use dimdate_core::{FiscalAnchor, FiscalWeekPolicy};

use crate::period::{
    Period, add_days, add_months, days_between, index_of, month_bounds, pred, sub_days, sub_months,
};

/// `(quarter number, months after the fiscal year start)`.
const QUARTER_OFFSETS: [(i32, u32); 4] = [(1, 0), (2, 3), (3, 6), (4, 9)];

/// The fiscal periods containing one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalAttributes {
    pub date: NaiveDate,
    /// `index` is the fiscal year label.
    pub year: Period,
    pub quarter: Period,
    pub month: Period,
    pub week: Period,
    /// 1-based position counted from the policy's week start day.
    pub day_in_week: u32,
}

impl FiscalAttributes {
    #[must_use]
    pub fn compute(date: NaiveDate, anchor: FiscalAnchor, policy: FiscalWeekPolicy) -> Self {
        let year_start = fiscal_year_start(date, anchor);
        let year = Period::new(
            year_start.year(),
            year_start,
            pred(add_months(year_start, 12)),
        );
        let (week, day_in_week) = fiscal_week(date, &year, policy);

        Self {
            date,
            year,
            quarter: fiscal_quarter(date, year_start),
            month: fiscal_month(date, year_start),
            week,
            day_in_week,
        }
    }

    #[must_use]
    pub fn day_in_year(&self) -> u32 {
        self.year.day_in(self.date)
    }
}

/// Start of the fiscal year containing `date`.
#[must_use]
pub fn fiscal_year_start(date: NaiveDate, anchor: FiscalAnchor) -> NaiveDate {
    // Validated anchors exist in every year and validated ranges stay a year
    // inside chrono's span.
    let candidate = anchor.in_year(date.year());
    debug_assert!(candidate.is_some(), "anchor {anchor} has no date in {}", date.year());
    let Some(candidate) = candidate else {
        return date;
    };
    if date < candidate {
        sub_months(candidate, 12)
    } else {
        candidate
    }
}

/// The calendar month of `date`, numbered from the fiscal year's first month.
fn fiscal_month(date: NaiveDate, year_start: NaiveDate) -> Period {
    let number = (12 + date.month() - year_start.month()) % 12 + 1;
    let (start, end) = month_bounds(date);
    Period::new(index_of(number), start, end)
}

fn fiscal_quarter(date: NaiveDate, year_start: NaiveDate) -> Period {
    let spans = QUARTER_OFFSETS.map(|(number, months)| {
        Period::new(
            number,
            add_months(year_start, months),
            pred(add_months(year_start, months + 3)),
        )
    });

    // The four spans tile the fiscal year, so exactly one matches.
    spans
        .iter()
        .copied()
        .find(|span| span.contains(date))
        .unwrap_or(spans[3])
}

fn fiscal_week(date: NaiveDate, year: &Period, policy: FiscalWeekPolicy) -> (Period, u32) {
    let week_start_day = policy.week_start.weekday();
    let offset = days_since(date.weekday(), week_start_day);
    let week_start = sub_days(date, offset);
    let first_week_start = sub_days(year.start, days_since(year.start.weekday(), week_start_day));
    let number = days_between(first_week_start, week_start) / 7 + 1;

    let mut start = week_start;
    let mut end = add_days(week_start, 6);
    if policy.allow_partial_weeks {
        start = start.max(year.start);
        end = end.min(year.end);
    }

    (Period::new(index_of(number), start, end), offset + 1)
}

/// Days from the most recent `week_start` to `day`, 0 through 6.
fn days_since(day: Weekday, week_start: Weekday) -> u32 {
    (7 + day.num_days_from_monday() - week_start.num_days_from_monday()) % 7
}

#[cfg(test)]
mod tests {
    use dimdate_core::WeekStart;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn july() -> FiscalAnchor {
        FiscalAnchor::new(7, 1).unwrap()
    }

    fn compute(day: NaiveDate) -> FiscalAttributes {
        FiscalAttributes::compute(day, july(), FiscalWeekPolicy::default())
    }

    #[test]
    fn year_rolls_over_on_the_anchor() {
        let before = compute(date(2000, 6, 30));
        assert_eq!(before.year.index, 1999);
        assert_eq!(before.year.start, date(1999, 7, 1));
        assert_eq!(before.year.end, date(2000, 6, 30));

        let on = compute(date(2000, 7, 1));
        assert_eq!(on.year.index, 2000);
        assert_eq!(on.year.start, date(2000, 7, 1));
        assert_eq!(on.year.end, date(2001, 6, 30));
    }

    #[test]
    fn year_length_follows_february() {
        let leap = compute(date(2000, 6, 30));
        assert_eq!(leap.year.length(), 366);
        assert_eq!(leap.day_in_year(), 366);

        let common = compute(date(2001, 6, 30));
        assert_eq!(common.year.length(), 365);
        assert_eq!(compute(date(2000, 7, 1)).day_in_year(), 1);
    }

    #[rstest]
    #[case(date(2000, 7, 15), 1)]
    #[case(date(2000, 12, 1), 6)]
    #[case(date(2001, 1, 1), 7)]
    #[case(date(2000, 6, 15), 12)]
    fn months_count_from_the_anchor_month(#[case] day: NaiveDate, #[case] month: i32) {
        let attrs = compute(day);
        assert_eq!(attrs.month.index, month);
        assert_eq!(attrs.month.start, date(day.year(), day.month(), 1));
    }

    #[rstest]
    #[case(date(2000, 7, 1), 1, date(2000, 7, 1), date(2000, 9, 30), 92)]
    #[case(date(2000, 12, 31), 2, date(2000, 10, 1), date(2000, 12, 31), 92)]
    #[case(date(2001, 1, 1), 3, date(2001, 1, 1), date(2001, 3, 31), 90)]
    #[case(date(2000, 6, 30), 4, date(2000, 4, 1), date(2000, 6, 30), 91)]
    fn quarters_are_three_month_spans(
        #[case] day: NaiveDate,
        #[case] number: i32,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] length: u32,
    ) {
        let quarter = compute(day).quarter;
        assert_eq!(quarter, Period::new(number, start, end));
        assert_eq!(quarter.length(), length);
    }

    #[test]
    fn quarters_tile_the_year_for_a_month_end_anchor() {
        let anchor = FiscalAnchor::new(1, 31).unwrap();
        let policy = FiscalWeekPolicy::default();
        let year_start = date(2001, 1, 31);
        let year_end = date(2002, 1, 30);

        let mut quarter_days = [0u32; 4];
        for day in year_start.iter_days().take_while(|d| *d <= year_end) {
            let attrs = FiscalAttributes::compute(day, anchor, policy);
            assert_eq!(attrs.year.start, year_start);
            assert!(attrs.quarter.contains(day));
            let slot = usize::try_from(attrs.quarter.index - 1).unwrap();
            quarter_days[slot] += 1;
            assert_eq!(attrs.quarter.length(), {
                let q = attrs.quarter;
                u32::try_from((q.end - q.start).num_days() + 1).unwrap()
            });
        }
        assert_eq!(quarter_days.iter().sum::<u32>(), 365);
        assert!(quarter_days.iter().all(|days| *days >= 89 && *days <= 92));
    }

    #[test]
    fn anchor_mid_month_keeps_calendar_month_numbering() {
        let anchor = FiscalAnchor::new(4, 6).unwrap();
        let attrs = FiscalAttributes::compute(date(2001, 4, 5), anchor, FiscalWeekPolicy::default());
        assert_eq!(attrs.year.index, 2000);
        assert_eq!(attrs.year.start, date(2000, 4, 6));
        assert_eq!(attrs.month.index, 1);
        assert_eq!(attrs.quarter.index, 4);
        assert_eq!(attrs.quarter.end, date(2001, 4, 5));
    }

    #[test]
    fn partial_first_week_starts_on_the_year_start() {
        // 2000-07-01 is a Saturday.
        let first = compute(date(2000, 7, 1));
        assert_eq!(first.week, Period::new(1, date(2000, 7, 1), date(2000, 7, 2)));
        assert_eq!(first.day_in_week, 6);

        let second = compute(date(2000, 7, 3));
        assert_eq!(second.week, Period::new(2, date(2000, 7, 3), date(2000, 7, 9)));
        assert_eq!(second.day_in_week, 1);
    }

    #[test]
    fn partial_last_week_ends_on_the_year_end() {
        let last = compute(date(2000, 6, 30));
        assert_eq!(last.week, Period::new(53, date(2000, 6, 26), date(2000, 6, 30)));
    }

    #[test]
    fn whole_weeks_straddle_the_year_boundary() {
        let policy = FiscalWeekPolicy {
            week_start: WeekStart::Monday,
            allow_partial_weeks: false,
        };
        let old_year = FiscalAttributes::compute(date(2000, 6, 30), july(), policy);
        assert_eq!(old_year.week, Period::new(53, date(2000, 6, 26), date(2000, 7, 2)));

        let new_year = FiscalAttributes::compute(date(2000, 7, 1), july(), policy);
        assert_eq!(new_year.week, Period::new(1, date(2000, 6, 26), date(2000, 7, 2)));
        assert_eq!(new_year.week.length(), 7);
    }

    #[test]
    fn week_start_day_shifts_day_in_week() {
        let policy = FiscalWeekPolicy {
            week_start: WeekStart::Sunday,
            allow_partial_weeks: true,
        };
        // 2000-07-02 is a Sunday.
        let sunday = FiscalAttributes::compute(date(2000, 7, 2), july(), policy);
        assert_eq!(sunday.day_in_week, 1);
        assert_eq!(sunday.week.index, 2);
        assert_eq!(sunday.week.start, date(2000, 7, 2));
        assert_eq!(sunday.week.end, date(2000, 7, 8));
    }
}
