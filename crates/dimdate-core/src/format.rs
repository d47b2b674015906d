//! Format patterns for date-valued and label fields.
//!
//! Patterns are chrono strftime strings with one extension: `%q` expands to
//! the calendar quarter (1-4) of the date being rendered. `%%q` stays a
//! literal `%q`.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, NaiveDate};

/// Pattern used for date-valued fields that carry no explicit format.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Replace every `%q` in `pattern` with `quarter`.
#[must_use]
pub fn expand_quarter(pattern: &str, quarter: u32) -> Cow<'_, str> {
    if !pattern.contains("%q") {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('q') => {
                let _ = write!(out, "{quarter}");
            }
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    Cow::Owned(out)
}

/// Whether chrono accepts `pattern` once `%q` has been expanded.
#[must_use]
pub fn is_valid_pattern(pattern: &str) -> bool {
    let expanded = expand_quarter(pattern, 1);
    !StrftimeItems::new(&expanded).any(|item| matches!(item, Item::Error))
}

/// Render `date` through `pattern`.
///
/// Patterns are checked with [`is_valid_pattern`] when the registry is
/// validated, so rendering a registered pattern does not fail.
#[must_use]
pub fn render(pattern: &str, date: NaiveDate) -> String {
    let quarter = (date.month() - 1) / 3 + 1;
    let expanded = expand_quarter(pattern, quarter);
    let mut out = String::new();
    if write!(out, "{}", date.format(&expanded)).is_err() {
        out.clear();
    }
    out
}
