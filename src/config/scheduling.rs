//! Scheduling configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::scheduling::{Cadence, SessionScheduler};

/// Session cadence used when generating cohort schedules.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulingConfig {
    /// Maximum sessions in one Monday-to-Sunday week
    #[serde(default = "default_sessions_per_week")]
    pub sessions_per_week: u32,

    /// Days between consecutive sessions within a week
    #[serde(default = "default_stride_days")]
    pub stride_days: u32,
}

impl SchedulingConfig {
    pub fn cadence(&self) -> Result<Cadence, ValidationError> {
        Cadence::new(self.sessions_per_week, self.stride_days)
            .map_err(|e| ValidationError::InvalidCadence(e.to_string()))
    }

    pub fn scheduler(&self) -> Result<SessionScheduler, ValidationError> {
        Ok(SessionScheduler::new(self.cadence()?))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cadence().map(|_| ())
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            sessions_per_week: default_sessions_per_week(),
            stride_days: default_stride_days(),
        }
    }
}

fn default_sessions_per_week() -> u32 {
    Cadence::STANDARD.sessions_per_week()
}

fn default_stride_days() -> u32 {
    Cadence::STANDARD.stride_days()
}
