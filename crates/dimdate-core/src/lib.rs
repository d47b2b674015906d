//! # dimdate-core
//!
//! Data model and error types for Dimdate, the date-dimension generator.
//!
//! This crate provides the types shared across all Dimdate crates:
//! - The field catalogue (`FieldKey`) and per-request descriptors
//! - The immutable `FieldRegistry` snapshot and its validation
//! - Date ranges, fiscal anchors, and the fiscal week policy
//! - Output cells (`Value`) and the `GeneratedTable`
//! - Format patterns with the `%q` quarter extension
//! - Cross-cutting error types

pub mod anchor;
pub mod errors;
pub mod fields;
pub mod format;
pub mod range;
pub mod registry;
pub mod request;
pub mod table;
pub mod value;

pub use anchor::{FiscalAnchor, FiscalWeekPolicy, QuarterPattern, WeekStart};
pub use errors::{ConfigurationError, CoreError};
pub use fields::{FieldDescriptor, FieldFormat, FieldGroup, FieldKey, FieldKind, FieldOptions};
pub use range::DateRange;
pub use registry::{FieldOverride, FieldRegistry};
pub use request::{GenerationOptions, GenerationRequest, IdMode};
pub use table::GeneratedTable;
pub use value::Value;
