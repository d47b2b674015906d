//! Error types shared by every Dimdate crate.
//!
//! Configuration problems are collected under [`ConfigurationError`] and are
//! always raised before the first row of a table is generated. Crate-specific
//! errors (`ConfigError`, `ExportError`) live in their own crates and wrap
//! [`CoreError`] where needed.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the data model and the generation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The generation request is not valid; nothing was generated.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A field key was requested that the registry does not contain.
    #[error("Unknown field: {key}")]
    UnknownField { key: String },
}

/// A generation request failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid fiscal anchor: month {month}, day {day}")]
    InvalidAnchor { month: u32, day: u32 },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Semantic ids only hold four-digit years.
    #[error("Date {date} is outside the supported years {min}..={max}")]
    YearOutOfRange { date: NaiveDate, min: i32, max: i32 },

    #[error("Duplicate field order {order}: '{first}' and '{second}'")]
    DuplicateOrder {
        order: u32,
        first: String,
        second: String,
    },

    #[error("Invalid format pattern for field '{key}': {pattern}")]
    InvalidFormat { key: String, pattern: String },

    #[error("Field '{key}' does not accept a format pattern")]
    FormatNotSupported { key: String },

    #[error("Field '{key}' requires a format pattern")]
    MissingFormat { key: String },

    #[error("Row limit must be at least 1")]
    ZeroRowLimit,
}

impl CoreError {
    /// Whether this error came from request validation.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
