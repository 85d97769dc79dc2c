//! Command and query handlers.

pub mod cohort;
