//! In-memory adapters.
//!
//! Back every port with process memory. Used by the integration tests and
//! for running the HTTP surface without a database.

mod store;

pub use store::InMemoryAcademyStore;
