//! Table assembly: one row per date, one column per active field.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dimdate_core::format::{self, ISO_DATE};
use dimdate_core::{
    CoreError, FieldDescriptor, FieldKey, GeneratedTable, GenerationOptions, GenerationRequest,
    QuarterPattern, Value,
};
use rayon::prelude::*;

use crate::calendar::CalendarAttributes;
use crate::encoder::{IdBounds, SurrogateKeyEncoder};
use crate::fiscal::FiscalAttributes;
use crate::period::Period;

/// Everything computed for one date before field selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRecord {
    pub date: NaiveDate,
    pub id: i64,
    pub calendar: CalendarAttributes,
    pub fiscal: FiscalAttributes,
}

impl DateRecord {
    #[must_use]
    pub fn compute(
        date: NaiveDate,
        encoder: &SurrogateKeyEncoder,
        request: &GenerationRequest,
    ) -> Self {
        Self {
            date,
            id: encoder.encode(date),
            calendar: CalendarAttributes::compute(date),
            fiscal: FiscalAttributes::compute(date, request.anchor, request.week_policy),
        }
    }
}

/// Generate the dimension table for `request`.
///
/// The request and options are validated up front; once that succeeds no
/// row can fail. Identical inputs always produce identical tables.
pub fn generate(
    request: &GenerationRequest,
    options: GenerationOptions,
) -> Result<GeneratedTable, CoreError> {
    request.validate()?;
    options.validate()?;

    if request.quarter_pattern != QuarterPattern::Months {
        tracing::warn!(
            pattern = %request.quarter_pattern,
            "engine: quarter pattern is accepted but fiscal quarters stay three calendar months"
        );
    }

    let range = request.range;
    let day_count = range.day_count();
    let rows = options.row_limit.map_or(day_count, |limit| limit.min(day_count));

    let encoder = SurrogateKeyEncoder::new(request.registry.id_mode(), range.start);
    let mut bounds = IdBounds::for_range(&encoder, &range);
    if options.preview {
        bounds = bounds.widened_for_preview(&encoder);
    }

    let active = request.registry.active_fields();
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        rows,
        columns = active.len(),
        mode = ?encoder.mode(),
        preview = options.preview,
        "engine: generating table"
    );

    let records: Vec<DateRecord> = (0..rows)
        .into_par_iter()
        .filter_map(|offset| range.nth(offset))
        .map(|date| DateRecord::compute(date, &encoder, request))
        .collect();

    let mut columns: BTreeMap<u32, Column> = BTreeMap::new();
    for descriptor in active {
        let values = records
            .iter()
            .map(|record| field_value(descriptor, record, &encoder, &bounds))
            .collect();
        columns.insert(
            descriptor.order,
            Column {
                header: descriptor.display_name.clone(),
                values,
            },
        );
    }

    Ok(transpose(columns, records.len()))
}

struct Column {
    header: String,
    values: Vec<Value>,
}

/// Densify the order-keyed columns into headers and rows.
fn transpose(columns: BTreeMap<u32, Column>, row_count: usize) -> GeneratedTable {
    let width = columns.len();
    let mut headers = Vec::with_capacity(width);
    let mut rows: Vec<Vec<Value>> = (0..row_count).map(|_| Vec::with_capacity(width)).collect();

    for column in columns.into_values() {
        headers.push(column.header);
        for (row, value) in rows.iter_mut().zip(column.values) {
            row.push(value);
        }
    }

    GeneratedTable { headers, rows }
}

/// Raw attribute behind a field, before formatting.
enum Attribute {
    /// The row's own surrogate key.
    Key(i64),
    /// The id of one edge of a period, clamped to the run's bounds.
    BoundaryKey(Period, Edge),
    /// A date rendered through the field's pattern.
    Day(NaiveDate),
    Number(i64),
    Flag(bool),
}

#[derive(Clone, Copy)]
enum Edge {
    Start,
    End,
}

fn field_value(
    descriptor: &FieldDescriptor,
    record: &DateRecord,
    encoder: &SurrogateKeyEncoder,
    bounds: &IdBounds,
) -> Value {
    match attribute(descriptor.key, record) {
        Attribute::Key(id) => Value::Integer(id),
        Attribute::BoundaryKey(period, edge) => {
            let boundary = bounds.boundary(encoder, &period);
            match edge {
                Edge::Start => boundary.start_id.into(),
                Edge::End => boundary.end_id.into(),
            }
        }
        Attribute::Day(date) => {
            let pattern = descriptor.format.pattern().unwrap_or(ISO_DATE);
            Value::Text(format::render(pattern, date))
        }
        Attribute::Number(value) => Value::Integer(value),
        Attribute::Flag(flag) => Value::Flag(flag),
    }
}

fn attribute(key: FieldKey, record: &DateRecord) -> Attribute {
    let date = record.date;
    let cal = &record.calendar;
    let fis = &record.fiscal;

    match key {
        FieldKey::Id => Attribute::Key(record.id),
        FieldKey::Date => Attribute::Day(date),

        FieldKey::CalendarDay => number(cal.day_of_year()),
        FieldKey::CalendarWeek => index(&cal.week),
        FieldKey::CalendarWeekStartDateId => start_id(&cal.week),
        FieldKey::CalendarWeekEndDateId => end_id(&cal.week),
        FieldKey::CalendarWeekStartDate => Attribute::Day(cal.week.start),
        FieldKey::CalendarWeekEndDate => Attribute::Day(cal.week.end),
        FieldKey::CalendarDayInWeek => number(cal.day_in_week()),
        FieldKey::CalendarMonth => index(&cal.month),
        FieldKey::CalendarMonthStartDateId => start_id(&cal.month),
        FieldKey::CalendarMonthEndDateId => end_id(&cal.month),
        FieldKey::CalendarMonthStartDate => Attribute::Day(cal.month.start),
        FieldKey::CalendarMonthEndDate => Attribute::Day(cal.month.end),
        FieldKey::CalendarNumberOfDaysInMonth => number(cal.month.length()),
        FieldKey::CalendarDayInMonth => number(cal.month.day_in(date)),
        FieldKey::CalendarQuarter => index(&cal.quarter),
        FieldKey::CalendarQuarterStartDateId => start_id(&cal.quarter),
        FieldKey::CalendarQuarterEndDateId => end_id(&cal.quarter),
        FieldKey::CalendarQuarterStartDate => Attribute::Day(cal.quarter.start),
        FieldKey::CalendarQuarterEndDate => Attribute::Day(cal.quarter.end),
        FieldKey::CalendarNumberOfDaysInQuarter => number(cal.quarter.length()),
        FieldKey::CalendarDayInQuarter => number(cal.quarter.day_in(date)),
        FieldKey::CalendarYear => index(&cal.year),
        FieldKey::CalendarYearStartDateId => start_id(&cal.year),
        FieldKey::CalendarYearEndDateId => end_id(&cal.year),
        FieldKey::CalendarYearStartDate => Attribute::Day(cal.year.start),
        FieldKey::CalendarYearEndDate => Attribute::Day(cal.year.end),
        FieldKey::CalendarNumberOfDaysInYear => number(cal.year.length()),

        FieldKey::FiscalDay | FieldKey::FiscalDayInYear => number(fis.day_in_year()),
        FieldKey::FiscalWeek => index(&fis.week),
        FieldKey::FiscalWeekStartDateId => start_id(&fis.week),
        FieldKey::FiscalWeekEndDateId => end_id(&fis.week),
        FieldKey::FiscalWeekStartDate => Attribute::Day(fis.week.start),
        FieldKey::FiscalWeekEndDate => Attribute::Day(fis.week.end),
        FieldKey::FiscalDayInWeek => number(fis.day_in_week),
        FieldKey::FiscalMonth => index(&fis.month),
        FieldKey::FiscalMonthStartDateId => start_id(&fis.month),
        FieldKey::FiscalMonthEndDateId => end_id(&fis.month),
        FieldKey::FiscalMonthStartDate => Attribute::Day(fis.month.start),
        FieldKey::FiscalMonthEndDate => Attribute::Day(fis.month.end),
        FieldKey::FiscalNumberOfDaysInMonth => number(fis.month.length()),
        FieldKey::FiscalDayInMonth => number(fis.month.day_in(date)),
        FieldKey::FiscalQuarter => index(&fis.quarter),
        FieldKey::FiscalQuarterStartDateId => start_id(&fis.quarter),
        FieldKey::FiscalQuarterEndDateId => end_id(&fis.quarter),
        FieldKey::FiscalQuarterStartDate => Attribute::Day(fis.quarter.start),
        FieldKey::FiscalQuarterEndDate => Attribute::Day(fis.quarter.end),
        FieldKey::FiscalNumberOfDaysInQuarter => number(fis.quarter.length()),
        FieldKey::FiscalDayInQuarter => number(fis.quarter.day_in(date)),
        FieldKey::FiscalYear => index(&fis.year),
        FieldKey::FiscalYearStartDateId => start_id(&fis.year),
        FieldKey::FiscalYearEndDateId => end_id(&fis.year),
        FieldKey::FiscalYearStartDate => Attribute::Day(fis.year.start),
        FieldKey::FiscalYearEndDate => Attribute::Day(fis.year.end),
        FieldKey::FiscalNumberOfDaysInYear => number(fis.year.length()),

        FieldKey::IsFirstDayOfWeek => Attribute::Flag(cal.day_in_week() == 1),
        FieldKey::IsLastDayOfWeek => Attribute::Flag(cal.day_in_week() == 7),
        FieldKey::IsFirstDayOfMonth => Attribute::Flag(date == cal.month.start),
        FieldKey::IsLastDayOfMonth => Attribute::Flag(date == cal.month.end),
        FieldKey::IsFirstDayOfYear => Attribute::Flag(date == cal.year.start),
        FieldKey::IsLastDayOfYear => Attribute::Flag(date == cal.year.end),
        FieldKey::IsWeekend => Attribute::Flag(cal.is_weekend()),
        FieldKey::IsLeapYear => Attribute::Flag(cal.is_leap_year()),

        FieldKey::DateLongDescription
        | FieldKey::DateShortDescription
        | FieldKey::DayLongName
        | FieldKey::DayShortName
        | FieldKey::MonthLongName
        | FieldKey::MonthShortName
        | FieldKey::QuarterLongName
        | FieldKey::QuarterShortName => Attribute::Day(date),
    }
}

fn number(value: u32) -> Attribute {
    Attribute::Number(i64::from(value))
}

fn index(period: &Period) -> Attribute {
    Attribute::Number(i64::from(period.index))
}

const fn start_id(period: &Period) -> Attribute {
    Attribute::BoundaryKey(*period, Edge::Start)
}

const fn end_id(period: &Period) -> Attribute {
    Attribute::BoundaryKey(*period, Edge::End)
}
