//! Weekly cadence rule.

use crate::domain::foundation::ValidationError;

/// How sessions are spread across a week.
///
/// A week runs Monday to Sunday and Sundays never hold a session, so both
/// values are bounded by the six usable weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    sessions_per_week: u32,
    stride_days: u32,
}

impl Cadence {
    pub const MAX_SESSIONS_PER_WEEK: u32 = 6;
    pub const MAX_STRIDE_DAYS: u32 = 6;

    /// Three sessions a week, every other day.
    pub const STANDARD: Cadence = Cadence {
        sessions_per_week: 3,
        stride_days: 2,
    };

    pub fn new(sessions_per_week: u32, stride_days: u32) -> Result<Self, ValidationError> {
        check_bounds("sessions_per_week", sessions_per_week, Self::MAX_SESSIONS_PER_WEEK)?;
        check_bounds("stride_days", stride_days, Self::MAX_STRIDE_DAYS)?;
        Ok(Self {
            sessions_per_week,
            stride_days,
        })
    }

    pub fn sessions_per_week(&self) -> u32 {
        self.sessions_per_week
    }

    pub fn stride_days(&self) -> u32 {
        self.stride_days
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn check_bounds(field: &str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value == 0 || value > max {
        return Err(ValidationError::out_of_range(
            field,
            1,
            max as i32,
            value.min(i32::MAX as u32) as i32,
        ));
    }
    Ok(())
}
