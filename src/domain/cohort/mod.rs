//! Cohort domain module.
//!
//! A cohort is a named batch of enrolled students. Its schedule is a list of
//! numbered sessions generated from the cohort's start and end dates and
//! replaced wholesale whenever it is regenerated.

mod aggregate;
mod errors;
mod session;

pub use aggregate::{Cohort, CohortSummary};
pub use errors::CohortError;
pub use session::CohortSession;
