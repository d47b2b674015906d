//! Surrogate key encoding and boundary clamping.

use chrono::{Datelike, NaiveDate};
use dimdate_core::{DateRange, IdMode};

use crate::period::{Period, ymd};

/// Encodes dates as integer ids for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurrogateKeyEncoder {
    mode: IdMode,
    range_start: NaiveDate,
}

impl SurrogateKeyEncoder {
    #[must_use]
    pub const fn new(mode: IdMode, range_start: NaiveDate) -> Self {
        Self { mode, range_start }
    }

    #[must_use]
    pub const fn mode(&self) -> IdMode {
        self.mode
    }

    /// Semantic mode yields `YYYYMMDD`; sequential mode yields the number of
    /// days since the range start, so the range start encodes as 0 and
    /// earlier dates go negative.
    #[must_use]
    pub fn encode(&self, date: NaiveDate) -> i64 {
        match self.mode {
            IdMode::Semantic => semantic_id(date),
            IdMode::Sequential => (date - self.range_start).num_days(),
        }
    }
}

/// `year * 10000 + month * 100 + day`.
#[must_use]
pub fn semantic_id(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// `None` (unknown) when `id` lies outside `[low, high]`.
#[must_use]
pub fn clamp(id: i64, low: i64, high: i64) -> Option<i64> {
    (low..=high).contains(&id).then_some(id)
}

/// Start and end of a period with their ids clamped to the run's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodBoundary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_id: Option<i64>,
    pub end_id: Option<i64>,
}

/// Inclusive id range outside which boundary ids become unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdBounds {
    pub low: i64,
    pub high: i64,
}

/// Span preview runs widen their bounds to.
const PREVIEW_SPAN: (i32, i32) = (1900, 2999);

impl IdBounds {
    /// Bounds of the requested range itself.
    #[must_use]
    pub fn for_range(encoder: &SurrogateKeyEncoder, range: &DateRange) -> Self {
        Self {
            low: encoder.encode(range.start),
            high: encoder.encode(range.end),
        }
    }

    /// These bounds widened to cover 1900-01-01 through 2999-12-31.
    #[must_use]
    pub fn widened_for_preview(self, encoder: &SurrogateKeyEncoder) -> Self {
        let low = encoder.encode(ymd(PREVIEW_SPAN.0, 1, 1));
        let high = encoder.encode(ymd(PREVIEW_SPAN.1, 12, 31));
        Self {
            low: self.low.min(low),
            high: self.high.max(high),
        }
    }

    #[must_use]
    pub fn clamp(&self, id: i64) -> Option<i64> {
        clamp(id, self.low, self.high)
    }

    #[must_use]
    pub fn boundary(&self, encoder: &SurrogateKeyEncoder, period: &Period) -> PeriodBoundary {
        PeriodBoundary {
            start_date: period.start,
            end_date: period.end,
            start_id: self.clamp(encoder.encode(period.start)),
            end_id: self.clamp(encoder.encode(period.end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn semantic_ids_are_literal_dates() {
        let encoder = SurrogateKeyEncoder::new(IdMode::Semantic, date(1999, 6, 28));
        assert_eq!(encoder.encode(date(2000, 1, 1)), 20_000_101);
        assert_eq!(encoder.encode(date(2049, 12, 31)), 20_491_231);
    }

    #[test]
    fn sequential_ids_count_days_from_range_start() {
        let encoder = SurrogateKeyEncoder::new(IdMode::Sequential, date(2000, 1, 1));
        assert_eq!(encoder.encode(date(2000, 1, 1)), 0);
        assert_eq!(encoder.encode(date(2000, 1, 3)), 2);
        assert_eq!(encoder.encode(date(2000, 2, 1)), 31);
        assert_eq!(encoder.encode(date(1999, 12, 27)), -5);
    }

    #[test]
    fn encoding_ignores_call_order() {
        let encoder = SurrogateKeyEncoder::new(IdMode::Sequential, date(2000, 1, 1));
        let later = encoder.encode(date(2000, 3, 1));
        let _ = encoder.encode(date(2000, 1, 2));
        assert_eq!(encoder.encode(date(2000, 3, 1)), later);
    }

    #[test]
    fn clamp_keeps_inclusive_bounds() {
        assert_eq!(clamp(5, 5, 10), Some(5));
        assert_eq!(clamp(10, 5, 10), Some(10));
        assert_eq!(clamp(4, 5, 10), None);
        assert_eq!(clamp(11, 5, 10), None);
    }

    #[test]
    fn boundary_before_range_start_is_unknown() {
        let range = DateRange::new(date(2000, 1, 10), date(2000, 1, 20)).unwrap();
        let encoder = SurrogateKeyEncoder::new(IdMode::Semantic, range.start);
        let bounds = IdBounds::for_range(&encoder, &range);
        let week = Period::new(2, date(2000, 1, 10), date(2000, 1, 16));
        let straddling = Period::new(1, date(2000, 1, 3), date(2000, 1, 9));

        let inside = bounds.boundary(&encoder, &week);
        assert_eq!(inside.start_id, Some(20_000_110));
        assert_eq!(inside.end_id, Some(20_000_116));

        let before = bounds.boundary(&encoder, &straddling);
        assert_eq!(before.start_id, None);
        assert_eq!(before.end_id, None);
    }

    #[test]
    fn preview_bounds_cover_the_sentinel_span() {
        let range = DateRange::new(date(2000, 1, 10), date(2000, 1, 20)).unwrap();
        let encoder = SurrogateKeyEncoder::new(IdMode::Semantic, range.start);
        let bounds = IdBounds::for_range(&encoder, &range).widened_for_preview(&encoder);
        assert_eq!(bounds.low, 19_000_101);
        assert_eq!(bounds.high, 29_991_231);
        assert_eq!(bounds.clamp(20_000_103), Some(20_000_103));
    }

    #[test]
    fn preview_bounds_never_shrink_the_range() {
        let range = DateRange::new(date(1850, 1, 1), date(1850, 1, 31)).unwrap();
        let encoder = SurrogateKeyEncoder::new(IdMode::Semantic, range.start);
        let bounds = IdBounds::for_range(&encoder, &range).widened_for_preview(&encoder);
        assert_eq!(bounds.low, 18_500_101);
    }
}
