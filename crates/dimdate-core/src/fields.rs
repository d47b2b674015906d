//! Field catalogue and descriptors.
//!
//! Every generatable attribute is a [`FieldKey`]. The catalogue below fixes
//! each key's group, value kind, default column order, default activation,
//! default format pattern, and description. A [`FieldDescriptor`] is the
//! per-request, caller-adjustable view of one key.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::format::ISO_DATE;

// ---------------------------------------------------------------------------
// FieldGroup
// ---------------------------------------------------------------------------

/// The four groups fields are organised into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Basic,
    Calendar,
    Fiscal,
    Flags,
}

impl FieldGroup {
    pub const ALL: [Self; 4] = [Self::Basic, Self::Calendar, Self::Fiscal, Self::Flags];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Calendar => "calendar",
            Self::Fiscal => "fiscal",
            Self::Flags => "flags",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// What sort of value a field produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Surrogate key, possibly unknown after clamping.
    Id,
    Number,
    /// A date rendered through an optional pattern, ISO when raw.
    Date,
    /// Text that only exists through its pattern.
    Label,
    Flag,
}

impl FieldKind {
    #[must_use]
    pub const fn accepts_pattern(self) -> bool {
        matches!(self, Self::Date | Self::Label)
    }

    #[must_use]
    pub const fn requires_pattern(self) -> bool {
        matches!(self, Self::Label)
    }
}

// ---------------------------------------------------------------------------
// FieldKey catalogue
// ---------------------------------------------------------------------------

macro_rules! field_catalogue {
    ($(
        $variant:ident($key:literal, $group:ident, $kind:ident, $order:literal, $active:literal, $format:expr, $description:literal);
    )*) => {
        /// Every attribute the generator can compute.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            JsonSchema,
        )]
        #[serde(rename_all = "camelCase")]
        pub enum FieldKey {
            $($variant,)*
        }

        impl FieldKey {
            /// All keys in catalogue order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Configuration key, e.g. `calendarWeekStartDateId`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }

            /// Default column header, e.g. `CalendarWeekStartDateId`.
            #[must_use]
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            #[must_use]
            pub const fn group(self) -> FieldGroup {
                match self {
                    $(Self::$variant => FieldGroup::$group,)*
                }
            }

            #[must_use]
            pub const fn kind(self) -> FieldKind {
                match self {
                    $(Self::$variant => FieldKind::$kind,)*
                }
            }

            #[must_use]
            pub const fn default_order(self) -> u32 {
                match self {
                    $(Self::$variant => $order,)*
                }
            }

            #[must_use]
            pub const fn default_active(self) -> bool {
                match self {
                    $(Self::$variant => $active,)*
                }
            }

            #[must_use]
            pub const fn default_format(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $format,)*
                }
            }

            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }
        }
    };
}

field_catalogue! {
    Id("id", Basic, Id, 1, true, None, "Primary key.");
    Date("date", Basic, Date, 2, true, Some(ISO_DATE), "The actual date for the record.");
    DateLongDescription("dateLongDescription", Basic, Label, 3, true, Some("%A %-d %B %Y"), "Full description of a date, e.g., Monday 1 January 2000.");
    DateShortDescription("dateShortDescription", Basic, Label, 4, true, Some("%-d %b %Y"), "Short description of a date, e.g., 1 Jan 2000.");
    DayLongName("dayLongName", Basic, Label, 5, true, Some("%A"), "Full name of a day, e.g., Monday.");
    DayShortName("dayShortName", Basic, Label, 6, true, Some("%a"), "Short name of a day, e.g., Mon.");
    MonthLongName("monthLongName", Basic, Label, 7, true, Some("%B"), "Full name of a month, e.g., January.");
    MonthShortName("monthShortName", Basic, Label, 8, true, Some("%b"), "Short name of a month, e.g., Jan.");
    QuarterLongName("quarterLongName", Basic, Label, 9, true, Some("Quarter %q"), "Full name of a quarter, e.g., Quarter 1.");
    QuarterShortName("quarterShortName", Basic, Label, 10, true, Some("Q%q"), "Short name of a quarter, e.g., Q1.");

    CalendarDay("calendarDay", Calendar, Number, 100, true, None, "The day number in the calendar year.");
    CalendarWeek("calendarWeek", Calendar, Number, 101, true, None, "The calendar week number in the year.");
    CalendarWeekStartDateId("calendarWeekStartDateId", Calendar, Id, 102, true, None, "Foreign key indicating the calendar week's start date.");
    CalendarWeekEndDateId("calendarWeekEndDateId", Calendar, Id, 103, true, None, "Foreign key indicating the calendar week's end date.");
    CalendarWeekStartDate("calendarWeekStartDate", Calendar, Date, 104, false, Some(ISO_DATE), "The calendar week's start date.");
    CalendarWeekEndDate("calendarWeekEndDate", Calendar, Date, 105, false, Some(ISO_DATE), "The calendar week's end date.");
    CalendarDayInWeek("calendarDayInWeek", Calendar, Number, 106, true, None, "The day number in the week.");
    CalendarMonth("calendarMonth", Calendar, Number, 107, true, None, "The calendar month number in the year.");
    CalendarMonthStartDateId("calendarMonthStartDateId", Calendar, Id, 108, true, None, "Foreign key indicating the calendar month's start date.");
    CalendarMonthEndDateId("calendarMonthEndDateId", Calendar, Id, 109, true, None, "Foreign key indicating the calendar month's end date.");
    CalendarMonthStartDate("calendarMonthStartDate", Calendar, Date, 110, false, Some(ISO_DATE), "The calendar month's start date.");
    CalendarMonthEndDate("calendarMonthEndDate", Calendar, Date, 111, false, Some(ISO_DATE), "The calendar month's end date.");
    CalendarNumberOfDaysInMonth("calendarNumberOfDaysInMonth", Calendar, Number, 112, true, None, "The number of days in the calendar month.");
    CalendarDayInMonth("calendarDayInMonth", Calendar, Number, 113, true, None, "The day number in the calendar month.");
    CalendarQuarter("calendarQuarter", Calendar, Number, 114, true, None, "The calendar quarter number in the year.");
    CalendarQuarterStartDateId("calendarQuarterStartDateId", Calendar, Id, 115, true, None, "Foreign key indicating the calendar quarter's start date.");
    CalendarQuarterEndDateId("calendarQuarterEndDateId", Calendar, Id, 116, true, None, "Foreign key indicating the calendar quarter's end date.");
    CalendarQuarterStartDate("calendarQuarterStartDate", Calendar, Date, 117, false, Some(ISO_DATE), "The calendar quarter's start date.");
    CalendarQuarterEndDate("calendarQuarterEndDate", Calendar, Date, 118, false, Some(ISO_DATE), "The calendar quarter's end date.");
    CalendarNumberOfDaysInQuarter("calendarNumberOfDaysInQuarter", Calendar, Number, 119, true, None, "The number of days in the calendar quarter.");
    CalendarDayInQuarter("calendarDayInQuarter", Calendar, Number, 120, true, None, "The day number in the calendar quarter.");
    CalendarYear("calendarYear", Calendar, Number, 121, true, None, "The calendar year number.");
    CalendarYearStartDateId("calendarYearStartDateId", Calendar, Id, 122, true, None, "Foreign key indicating the calendar year's start date.");
    CalendarYearEndDateId("calendarYearEndDateId", Calendar, Id, 123, true, None, "Foreign key indicating the calendar year's end date.");
    CalendarYearStartDate("calendarYearStartDate", Calendar, Date, 124, false, Some(ISO_DATE), "The calendar year's start date.");
    CalendarYearEndDate("calendarYearEndDate", Calendar, Date, 125, false, Some(ISO_DATE), "The calendar year's end date.");
    CalendarNumberOfDaysInYear("calendarNumberOfDaysInYear", Calendar, Number, 126, true, None, "The number of days in the calendar year.");

    FiscalDay("fiscalDay", Fiscal, Number, 1000, true, None, "The fiscal day number in the year.");
    FiscalWeek("fiscalWeek", Fiscal, Number, 1001, true, None, "The fiscal week number in the year.");
    FiscalWeekStartDateId("fiscalWeekStartDateId", Fiscal, Id, 1002, true, None, "Foreign key indicating the fiscal week's start date.");
    FiscalWeekEndDateId("fiscalWeekEndDateId", Fiscal, Id, 1003, true, None, "Foreign key indicating the fiscal week's end date.");
    FiscalWeekStartDate("fiscalWeekStartDate", Fiscal, Date, 1004, false, Some(ISO_DATE), "The fiscal week's start date.");
    FiscalWeekEndDate("fiscalWeekEndDate", Fiscal, Date, 1005, false, Some(ISO_DATE), "The fiscal week's end date.");
    FiscalDayInWeek("fiscalDayInWeek", Fiscal, Number, 1006, true, None, "The day number in the fiscal week.");
    FiscalMonth("fiscalMonth", Fiscal, Number, 1007, true, None, "The fiscal month number in the year.");
    FiscalMonthStartDateId("fiscalMonthStartDateId", Fiscal, Id, 1008, true, None, "Foreign key indicating the fiscal month's start date.");
    FiscalMonthEndDateId("fiscalMonthEndDateId", Fiscal, Id, 1009, true, None, "Foreign key indicating the fiscal month's end date.");
    FiscalMonthStartDate("fiscalMonthStartDate", Fiscal, Date, 1010, false, Some(ISO_DATE), "The fiscal month's start date.");
    FiscalMonthEndDate("fiscalMonthEndDate", Fiscal, Date, 1011, false, Some(ISO_DATE), "The fiscal month's end date.");
    FiscalNumberOfDaysInMonth("fiscalNumberOfDaysInMonth", Fiscal, Number, 1012, true, None, "The number of days in the fiscal month.");
    FiscalDayInMonth("fiscalDayInMonth", Fiscal, Number, 1013, true, None, "The day number in the fiscal month.");
    FiscalQuarter("fiscalQuarter", Fiscal, Number, 1014, true, None, "The fiscal quarter number in the year.");
    FiscalQuarterStartDateId("fiscalQuarterStartDateId", Fiscal, Id, 1015, true, None, "Foreign key indicating the fiscal quarter's start date.");
    FiscalQuarterEndDateId("fiscalQuarterEndDateId", Fiscal, Id, 1016, true, None, "Foreign key indicating the fiscal quarter's end date.");
    FiscalQuarterStartDate("fiscalQuarterStartDate", Fiscal, Date, 1017, false, Some(ISO_DATE), "The fiscal quarter's start date.");
    FiscalQuarterEndDate("fiscalQuarterEndDate", Fiscal, Date, 1018, false, Some(ISO_DATE), "The fiscal quarter's end date.");
    FiscalNumberOfDaysInQuarter("fiscalNumberOfDaysInQuarter", Fiscal, Number, 1019, true, None, "The number of days in the fiscal quarter.");
    FiscalDayInQuarter("fiscalDayInQuarter", Fiscal, Number, 1020, true, None, "The day number in the fiscal quarter.");
    FiscalYear("fiscalYear", Fiscal, Number, 1021, true, None, "The fiscal year number.");
    FiscalYearStartDateId("fiscalYearStartDateId", Fiscal, Id, 1022, true, None, "Foreign key indicating the fiscal year's start date.");
    FiscalYearEndDateId("fiscalYearEndDateId", Fiscal, Id, 1023, true, None, "Foreign key indicating the fiscal year's end date.");
    FiscalYearStartDate("fiscalYearStartDate", Fiscal, Date, 1024, false, Some(ISO_DATE), "The fiscal year's start date.");
    FiscalYearEndDate("fiscalYearEndDate", Fiscal, Date, 1025, false, Some(ISO_DATE), "The fiscal year's end date.");
    FiscalNumberOfDaysInYear("fiscalNumberOfDaysInYear", Fiscal, Number, 1026, true, None, "The number of days in the fiscal year.");
    FiscalDayInYear("fiscalDayInYear", Fiscal, Number, 1027, true, None, "The day number in the fiscal year.");

    IsFirstDayOfWeek("isFirstDayOfWeek", Flags, Flag, 2000, true, None, "Indicates if the date is the first day of the week.");
    IsLastDayOfWeek("isLastDayOfWeek", Flags, Flag, 2001, true, None, "Indicates if the date is the last day of the week.");
    IsFirstDayOfMonth("isFirstDayOfMonth", Flags, Flag, 2002, true, None, "Indicates if the date is the first day of the month.");
    IsLastDayOfMonth("isLastDayOfMonth", Flags, Flag, 2003, true, None, "Indicates if the date is the last day of the month.");
    IsFirstDayOfYear("isFirstDayOfYear", Flags, Flag, 2004, true, None, "Indicates if the date is the first day of the year.");
    IsLastDayOfYear("isLastDayOfYear", Flags, Flag, 2005, true, None, "Indicates if the date is the last day of the year.");
    IsWeekend("isWeekend", Flags, Flag, 2006, true, None, "Indicates if the date falls on the weekend.");
    IsLeapYear("isLeapYear", Flags, Flag, 2007, true, None, "Indicates if the date falls in a leap year.");
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys match case-insensitively, so `CALENDARWEEK` from an environment
/// variable resolves to [`FieldKey::CalendarWeek`].
impl FromStr for FieldKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownField { key: s.to_string() })
    }
}

// ---------------------------------------------------------------------------
// FieldFormat / FieldOptions / FieldDescriptor
// ---------------------------------------------------------------------------

/// Whether a field renders through a pattern or emits its raw value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    #[default]
    Raw,
    Pattern(String),
}

impl FieldFormat {
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Raw => None,
            Self::Pattern(pattern) => Some(pattern),
        }
    }

    #[must_use]
    pub fn from_pattern(pattern: Option<&str>) -> Self {
        pattern.map_or(Self::Raw, |p| Self::Pattern(p.to_string()))
    }
}

/// Per-field switches beyond activation and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldOptions {
    /// Only meaningful on [`FieldKey::Id`]: `false` switches every id column
    /// to sequential offsets from the range start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_ids: Option<bool>,
}

/// One configurable output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub display_name: String,
    pub description: String,
    pub active: bool,
    pub order: u32,
    pub format: FieldFormat,
    #[serde(default)]
    pub options: FieldOptions,
}

impl FieldDescriptor {
    /// Descriptor carrying the catalogue defaults for `key`.
    #[must_use]
    pub fn default_for(key: FieldKey) -> Self {
        let options = if key == FieldKey::Id {
            FieldOptions {
                semantic_ids: Some(true),
            }
        } else {
            FieldOptions::default()
        };

        Self {
            key,
            display_name: key.display_name().to_string(),
            description: key.description().to_string(),
            active: key.default_active(),
            order: key.default_order(),
            format: FieldFormat::from_pattern(key.default_format()),
            options,
        }
    }

    #[must_use]
    pub const fn group(&self) -> FieldGroup {
        self.key.group()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalogue_orders_are_unique() {
        let orders: HashSet<u32> = FieldKey::ALL.iter().map(|k| k.default_order()).collect();
        assert_eq!(orders.len(), FieldKey::ALL.len());
    }

    #[test]
    fn config_key_matches_serde_name() {
        for key in FieldKey::ALL {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, serde_json::Value::String(key.as_str().into()));
        }
    }

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!(
            "calendarweekstartdateid".parse::<FieldKey>().unwrap(),
            FieldKey::CalendarWeekStartDateId
        );
        assert_eq!("FiscalYear".parse::<FieldKey>().unwrap(), FieldKey::FiscalYear);
        assert!(matches!(
            "fiscalHalf".parse::<FieldKey>(),
            Err(CoreError::UnknownField { .. })
        ));
    }

    #[test]
    fn defaults_are_consistent_with_kinds() {
        for key in FieldKey::ALL {
            let has_pattern = key.default_format().is_some();
            if key.kind().requires_pattern() {
                assert!(has_pattern, "{key} needs a default pattern");
            }
            if !key.kind().accepts_pattern() {
                assert!(!has_pattern, "{key} must not carry a pattern");
            }
        }
    }

    #[test]
    fn only_the_id_descriptor_carries_id_options() {
        let id = FieldDescriptor::default_for(FieldKey::Id);
        assert_eq!(id.options.semantic_ids, Some(true));
        assert_eq!(id.display_name, "Id");

        let week = FieldDescriptor::default_for(FieldKey::CalendarWeekStartDate);
        assert_eq!(week.options.semantic_ids, None);
        assert!(!week.active);
        assert_eq!(week.format.pattern(), Some(ISO_DATE));
    }
}
