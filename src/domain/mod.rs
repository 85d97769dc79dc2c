//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (calendar dates, IDs, enums, errors)
//! - `scheduling` - Date-range validation and session date generation
//! - `cohort` - Cohorts, their scheduled sessions and related errors

pub mod cohort;
pub mod foundation;
pub mod scheduling;
