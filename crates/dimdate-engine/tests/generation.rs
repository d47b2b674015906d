//! End-to-end generation tests over the public engine API.

use chrono::NaiveDate;
use dimdate_core::{
    ConfigurationError, CoreError, DateRange, FieldGroup, FieldKey, FieldOverride, FieldRegistry,
    FiscalAnchor, FiscalWeekPolicy, GeneratedTable, GenerationOptions, GenerationRequest, IdMode,
    Value, WeekStart,
};
use dimdate_engine::generate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(start: NaiveDate, end: NaiveDate) -> GenerationRequest {
    GenerationRequest::new(
        FieldRegistry::defaults(),
        DateRange::new(start, end).unwrap(),
        FiscalAnchor::default(),
    )
}

fn full(req: &GenerationRequest) -> GeneratedTable {
    generate(req, GenerationOptions::full()).unwrap()
}

fn int(table: &GeneratedTable, row: usize, header: &str) -> Option<i64> {
    table.cell(row, header).and_then(Value::as_integer)
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn one_row_per_day_inclusive() {
    let table = full(&request(date(2000, 1, 1), date(2000, 1, 5)));
    assert_eq!(table.len(), 5);
    assert!(table.rows.iter().all(|row| row.len() == table.width()));
}

#[test]
fn single_day_range_has_one_row() {
    let table = full(&request(date(2000, 2, 29), date(2000, 2, 29)));
    assert_eq!(table.len(), 1);
    assert_eq!(int(&table, 0, "Id"), Some(20_000_229));
}

#[test]
fn headers_follow_ascending_order() {
    let req = request(date(2000, 1, 1), date(2000, 1, 2));
    let table = full(&req);

    let expected: Vec<String> = req
        .registry
        .active_fields()
        .iter()
        .map(|d| d.display_name.clone())
        .collect();
    assert_eq!(table.headers, expected);

    let orders: Vec<u32> = req.registry.active_fields().iter().map(|d| d.order).collect();
    assert!(orders.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(table.headers.first().map(String::as_str), Some("Id"));
}

#[test]
fn reordering_moves_the_column() {
    let registry = FieldRegistry::defaults()
        .with_group_active(FieldGroup::Calendar, false)
        .with_group_active(FieldGroup::Fiscal, false)
        .with_group_active(FieldGroup::Flags, false)
        .with_override(
            "date",
            &FieldOverride {
                order: Some(5000),
                name: Some("CalendarDate".into()),
                ..FieldOverride::default()
            },
        )
        .unwrap();
    let mut req = request(date(2000, 1, 1), date(2000, 1, 1));
    req.registry = registry;

    let table = full(&req);
    assert_eq!(table.headers.last().map(String::as_str), Some("CalendarDate"));
    assert_eq!(table.width(), 10);
}

#[test]
fn no_active_fields_keeps_one_empty_row_per_date() {
    let mut registry = FieldRegistry::defaults();
    for group in FieldGroup::ALL {
        registry = registry.with_group_active(group, false);
    }
    let mut req = request(date(2000, 1, 1), date(2000, 1, 3));
    req.registry = registry;

    let table = full(&req);
    assert!(table.headers.is_empty());
    assert_eq!(table.rows, vec![Vec::<Value>::new(); 3]);
}

// ---------------------------------------------------------------------------
// Ids and clamping
// ---------------------------------------------------------------------------

#[test]
fn semantic_ids_by_default() {
    let table = full(&request(date(2000, 1, 1), date(2000, 1, 5)));
    assert_eq!(int(&table, 0, "Id"), Some(20_000_101));
    assert_eq!(int(&table, 4, "Id"), Some(20_000_105));
}

#[test]
fn sequential_ids_offset_from_range_start() {
    let mut req = request(date(2000, 1, 1), date(2000, 1, 5));
    req.registry = req.registry.with_id_mode(IdMode::Sequential);

    let table = full(&req);
    assert_eq!(int(&table, 0, "Id"), Some(0));
    assert_eq!(int(&table, 2, "Id"), Some(2));
    assert_eq!(int(&table, 2, "CalendarMonthStartDateId"), Some(0));
    assert_eq!(table.cell(2, "CalendarMonthEndDateId"), Some(&Value::Unknown));
}

#[test]
fn week_starting_before_the_range_has_unknown_start_id() {
    let table = full(&request(date(2000, 1, 10), date(2000, 1, 20)));

    // 2000-01-10 is a Monday, so its own week is fully inside the range.
    assert_eq!(int(&table, 0, "CalendarWeekStartDateId"), Some(20_000_110));
    assert_eq!(int(&table, 0, "CalendarWeekEndDateId"), Some(20_000_116));

    // The month of 2000-01-10 starts on the 1st, before the range.
    assert_eq!(
        table.cell(0, "CalendarMonthStartDateId"),
        Some(&Value::Unknown)
    );
    assert_eq!(table.cell(0, "CalendarMonthEndDateId"), Some(&Value::Unknown));

    // 2000-01-17..23: the week starts inside and ends outside.
    let last = table.len() - 1;
    assert_eq!(int(&table, last, "CalendarWeekStartDateId"), Some(20_000_117));
    assert_eq!(
        table.cell(last, "CalendarWeekEndDateId"),
        Some(&Value::Unknown)
    );
}

#[test]
fn range_starting_midweek_clamps_the_week_start() {
    // 2000-01-12 is a Wednesday; its week starts on Monday 2000-01-10.
    let table = full(&request(date(2000, 1, 12), date(2000, 1, 20)));
    assert_eq!(
        table.cell(0, "CalendarWeekStartDateId"),
        Some(&Value::Unknown)
    );
    assert_eq!(int(&table, 0, "CalendarWeekEndDateId"), Some(20_000_116));
}

#[test]
fn fiscal_boundaries_before_the_range_are_unknown() {
    let table = full(&request(date(2000, 1, 10), date(2000, 1, 20)));

    // 2000-01-10 sits in fiscal year 1999 (1999-07-01..2000-06-30), fiscal
    // quarter 3 (January..March) and the fiscal month of January.
    for header in [
        "FiscalYearStartDateId",
        "FiscalYearEndDateId",
        "FiscalQuarterStartDateId",
        "FiscalQuarterEndDateId",
        "FiscalMonthStartDateId",
        "FiscalMonthEndDateId",
    ] {
        assert_eq!(table.cell(0, header), Some(&Value::Unknown), "{header}");
    }
    assert_eq!(int(&table, 0, "FiscalWeekStartDateId"), Some(20_000_110));
    assert_eq!(int(&table, 0, "FiscalWeekEndDateId"), Some(20_000_116));
}

#[test]
fn fiscal_boundaries_inside_the_range_keep_their_ids() {
    let table = full(&request(date(2000, 7, 1), date(2000, 9, 30)));

    assert_eq!(int(&table, 0, "FiscalYearStartDateId"), Some(20_000_701));
    assert_eq!(table.cell(0, "FiscalYearEndDateId"), Some(&Value::Unknown));
    assert_eq!(int(&table, 0, "FiscalQuarterStartDateId"), Some(20_000_701));
    assert_eq!(int(&table, 0, "FiscalQuarterEndDateId"), Some(20_000_930));
    assert_eq!(int(&table, 0, "FiscalMonthStartDateId"), Some(20_000_701));
    assert_eq!(int(&table, 0, "FiscalMonthEndDateId"), Some(20_000_731));

    // Saturday 2000-07-01 opens a partial fiscal week ending on the Sunday.
    assert_eq!(int(&table, 0, "FiscalWeekStartDateId"), Some(20_000_701));
    assert_eq!(int(&table, 0, "FiscalWeekEndDateId"), Some(20_000_702));

    let last = table.len() - 1;
    assert_eq!(int(&table, last, "FiscalMonthStartDateId"), Some(20_000_901));
    assert_eq!(int(&table, last, "FiscalQuarterEndDateId"), Some(20_000_930));
}

#[test]
fn preview_widens_clamp_bounds() {
    let req = request(date(2000, 1, 10), date(2000, 1, 20));
    let table = generate(&req, GenerationOptions::preview(3)).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(int(&table, 0, "CalendarMonthStartDateId"), Some(20_000_101));
    assert_eq!(int(&table, 0, "CalendarYearEndDateId"), Some(20_001_231));
}

#[rstest]
#[case(Some(3), 3)]
#[case(Some(10), 5)]
#[case(None, 5)]
fn row_limit_never_passes_the_range_end(#[case] limit: Option<usize>, #[case] expected: usize) {
    let req = request(date(2000, 1, 1), date(2000, 1, 5));
    let options = GenerationOptions {
        row_limit: limit,
        preview: false,
    };
    assert_eq!(generate(&req, options).unwrap().len(), expected);
}

// ---------------------------------------------------------------------------
// Calendar and fiscal columns
// ---------------------------------------------------------------------------

#[test]
fn fiscal_year_rolls_over_on_july_first() {
    let table = full(&request(date(2000, 6, 30), date(2000, 7, 1)));
    assert_eq!(int(&table, 0, "FiscalYear"), Some(1999));
    assert_eq!(int(&table, 1, "FiscalYear"), Some(2000));
    assert_eq!(int(&table, 0, "FiscalMonth"), Some(12));
    assert_eq!(int(&table, 1, "FiscalMonth"), Some(1));
    assert_eq!(int(&table, 0, "FiscalQuarter"), Some(4));
    assert_eq!(int(&table, 1, "FiscalQuarter"), Some(1));
    assert_eq!(int(&table, 0, "FiscalDayInYear"), Some(366));
    assert_eq!(int(&table, 1, "FiscalDay"), Some(1));
}

#[test]
fn calendar_columns_for_a_leap_day() {
    let table = full(&request(date(2000, 2, 29), date(2000, 2, 29)));
    assert_eq!(int(&table, 0, "CalendarDay"), Some(60));
    assert_eq!(int(&table, 0, "CalendarMonth"), Some(2));
    assert_eq!(int(&table, 0, "CalendarNumberOfDaysInMonth"), Some(29));
    assert_eq!(int(&table, 0, "CalendarQuarter"), Some(1));
    assert_eq!(int(&table, 0, "CalendarNumberOfDaysInQuarter"), Some(91));
    assert_eq!(int(&table, 0, "CalendarDayInQuarter"), Some(60));
    assert_eq!(int(&table, 0, "CalendarNumberOfDaysInYear"), Some(366));
    assert_eq!(
        table.cell(0, "IsLeapYear").and_then(Value::as_flag),
        Some(true)
    );
    assert_eq!(
        table.cell(0, "IsLastDayOfMonth").and_then(Value::as_flag),
        Some(true)
    );
}

#[test]
fn flags_on_the_first_of_january() {
    // 2000-01-01 is a Saturday.
    let table = full(&request(date(2000, 1, 1), date(2000, 1, 1)));
    let flag = |header: &str| table.cell(0, header).and_then(Value::as_flag);
    assert_eq!(flag("IsFirstDayOfYear"), Some(true));
    assert_eq!(flag("IsFirstDayOfMonth"), Some(true));
    assert_eq!(flag("IsLastDayOfYear"), Some(false));
    assert_eq!(flag("IsWeekend"), Some(true));
    assert_eq!(flag("IsFirstDayOfWeek"), Some(false));
    assert_eq!(int(&table, 0, "CalendarDayInWeek"), Some(6));
}

#[test]
fn week_policy_flows_into_fiscal_columns() {
    let policy = FiscalWeekPolicy {
        week_start: WeekStart::Sunday,
        allow_partial_weeks: false,
    };
    let req = request(date(2000, 7, 1), date(2000, 7, 2)).with_week_policy(policy);
    let table = generate(&req, GenerationOptions::preview(2)).unwrap();

    // Sunday weeks: 2000-06-25..07-01 contains the fiscal year start.
    assert_eq!(int(&table, 0, "FiscalWeek"), Some(1));
    assert_eq!(int(&table, 0, "FiscalWeekStartDateId"), Some(20_000_625));
    assert_eq!(int(&table, 0, "FiscalDayInWeek"), Some(7));
    assert_eq!(int(&table, 1, "FiscalWeek"), Some(2));
    assert_eq!(int(&table, 1, "FiscalDayInWeek"), Some(1));
}

// ---------------------------------------------------------------------------
// Validation and determinism
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_produce_identical_tables() {
    let req = request(date(1999, 6, 28), date(2001, 12, 31));
    assert_eq!(full(&req), full(&req));
}

#[test]
fn duplicate_order_fails_before_generation() {
    let mut req = request(date(2000, 1, 1), date(2000, 1, 5));
    req.registry = req
        .registry
        .with_override(
            "calendarWeek",
            &FieldOverride {
                order: Some(100),
                ..FieldOverride::default()
            },
        )
        .unwrap();

    let err = generate(&req, GenerationOptions::full()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Configuration(ConfigurationError::DuplicateOrder { order: 100, .. })
    ));
}

#[test]
fn zero_row_limit_is_a_configuration_error() {
    let req = request(date(2000, 1, 1), date(2000, 1, 5));
    let err = generate(&req, GenerationOptions::preview(0)).unwrap_err();
    assert_eq!(
        err,
        CoreError::Configuration(ConfigurationError::ZeroRowLimit)
    );
}

#[test]
fn invalid_anchor_is_rejected() {
    let mut req = request(date(2000, 1, 1), date(2000, 1, 5));
    req.anchor = serde_json::from_str(r#"{"month":2,"day":30}"#).unwrap();
    assert!(generate(&req, GenerationOptions::full())
        .unwrap_err()
        .is_configuration());
}

#[test]
fn unknown_field_lookups_fail() {
    let registry = FieldRegistry::defaults();
    assert!(matches!(
        registry.is_active("fiscalHalf"),
        Err(CoreError::UnknownField { .. })
    ));
    assert!(registry.is_active(FieldKey::FiscalWeek.as_str()).unwrap());
}
