//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST API
//! - `memory` - In-process store backing every port
//! - `postgres` - PostgreSQL repositories and readers

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryAcademyStore;
pub use postgres::{
    PostgresCohortRepository, PostgresCohortSessionReader, PostgresCohortSessionRepository,
    PostgresEnrollmentReader,
};
