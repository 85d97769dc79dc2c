//! Cohort command and query handlers.

mod generate_sessions;
mod list_cohorts;
mod list_sessions;
mod preview_sessions;

pub use generate_sessions::{
    GenerateCohortSessionsCommand, GenerateCohortSessionsHandler, GenerateCohortSessionsResult,
};
pub use list_cohorts::ListCohortsHandler;
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use preview_sessions::{PreviewSessionsHandler, PreviewSessionsQuery};
