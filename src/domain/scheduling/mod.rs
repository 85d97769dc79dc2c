//! Scheduling domain module.
//!
//! Turns a cohort's inclusive start and end dates into an ordered list of
//! numbered session dates.
//!
//! # Usage
//!
//! Validate first, then generate:
//!
//! ```
//! use academy::domain::scheduling::{validate_range, SessionScheduler};
//!
//! let range = validate_range(Some("2025-01-06"), Some("2025-01-12")).unwrap();
//! let sessions = SessionScheduler::default().generate(&range);
//! assert_eq!(sessions.len(), 3);
//! ```

mod cadence;
mod generator;
mod range;

pub use cadence::Cadence;
pub use generator::{generate_sessions, SessionDate, SessionScheduler, SessionWalk};
pub use range::{validate_range, DateField, DateRange, RangeError};
