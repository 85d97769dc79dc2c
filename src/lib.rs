//! Academy - Cohort scheduling backend
//!
//! This crate schedules cohort sessions for the Bitcoin learning academy:
//! it validates cohort date ranges, generates numbered session dates on a
//! weekly cadence, persists them per cohort and serves them over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
