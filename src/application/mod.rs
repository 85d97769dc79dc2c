//! Application layer - Use cases orchestrating domain and ports.

pub mod handlers;
