//! The immutable input snapshot for one generation run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::anchor::{FiscalAnchor, FiscalWeekPolicy, QuarterPattern};
use crate::errors::{ConfigurationError, CoreError};
use crate::range::DateRange;
use crate::registry::FieldRegistry;

/// How dates map to surrogate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdMode {
    /// `YYYYMMDD`.
    #[default]
    Semantic,
    /// Days since the range start.
    Sequential,
}

/// Everything a generation run reads. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub registry: FieldRegistry,
    pub range: DateRange,
    pub anchor: FiscalAnchor,
    #[serde(default)]
    pub week_policy: FiscalWeekPolicy,
    #[serde(default)]
    pub quarter_pattern: QuarterPattern,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(registry: FieldRegistry, range: DateRange, anchor: FiscalAnchor) -> Self {
        Self {
            registry,
            range,
            anchor,
            week_policy: FiscalWeekPolicy::default(),
            quarter_pattern: QuarterPattern::default(),
        }
    }

    #[must_use]
    pub const fn with_week_policy(mut self, week_policy: FiscalWeekPolicy) -> Self {
        self.week_policy = week_policy;
        self
    }

    #[must_use]
    pub const fn with_quarter_pattern(mut self, quarter_pattern: QuarterPattern) -> Self {
        self.quarter_pattern = quarter_pattern;
        self
    }

    /// Validate the whole snapshot. Runs before any row is generated.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.anchor.validate()?;
        self.range.validate()?;
        self.registry.validate()?;
        Ok(())
    }
}

/// Per-run switches that are not part of the configuration snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Cap on the number of rows; never extends past the range end.
    pub row_limit: Option<usize>,
    /// Widen clamp bounds so a short sample shows boundary ids.
    pub preview: bool,
}

impl GenerationOptions {
    /// Full-range generation.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            row_limit: None,
            preview: false,
        }
    }

    /// A preview of at most `rows` rows with widened clamp bounds.
    #[must_use]
    pub const fn preview(rows: usize) -> Self {
        Self {
            row_limit: Some(rows),
            preview: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.row_limit == Some(0) {
            return Err(ConfigurationError::ZeroRowLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::registry::FieldOverride;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2000, 12, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn default_request_validates() {
        let request =
            GenerationRequest::new(FieldRegistry::defaults(), range(), FiscalAnchor::default());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn invalid_registry_fails_request_validation() {
        let registry = FieldRegistry::defaults()
            .with_override(
                "date",
                &FieldOverride {
                    order: Some(1),
                    ..FieldOverride::default()
                },
            )
            .unwrap();
        let request = GenerationRequest::new(registry, range(), FiscalAnchor::default());
        let err = request.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn zero_row_limit_is_rejected() {
        assert_eq!(
            GenerationOptions::preview(0).validate(),
            Err(ConfigurationError::ZeroRowLimit)
        );
        assert!(GenerationOptions::preview(10).validate().is_ok());
        assert!(GenerationOptions::full().validate().is_ok());
    }
}
