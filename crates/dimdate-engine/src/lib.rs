//! # dimdate-engine
//!
//! Turns a validated [`dimdate_core::GenerationRequest`] into a
//! [`dimdate_core::GeneratedTable`].
//!
//! - [`encoder`]: surrogate keys and boundary clamping
//! - [`calendar`]: ISO week, month, quarter, and year periods
//! - [`fiscal`]: periods relative to a fiscal anchor and week policy
//! - [`assembler`]: per-date records assembled into ordered columns
//!
//! Per-date computation runs on the rayon pool; assembly is single-owner and
//! preserves chronological order.

pub mod assembler;
pub mod calendar;
pub mod encoder;
pub mod fiscal;
pub mod period;

pub use assembler::{DateRecord, generate};
pub use calendar::CalendarAttributes;
pub use encoder::{IdBounds, PeriodBoundary, SurrogateKeyEncoder, clamp, semantic_id};
pub use fiscal::{FiscalAttributes, fiscal_year_start};
pub use period::Period;
