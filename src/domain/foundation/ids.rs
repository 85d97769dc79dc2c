//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortId(Uuid);

impl CohortId {
    /// Creates a new random CohortId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CohortId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CohortId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CohortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CohortId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a scheduled cohort session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortSessionId(Uuid);

impl CohortSessionId {
    /// Creates a new random CohortSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CohortSessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CohortSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CohortSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student identifier (the profile row of an enrolled student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Creates a new random StudentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a StudentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_id_generates_unique_values() {
        assert_ne!(CohortId::new(), CohortId::new());
    }

    #[test]
    fn cohort_id_parses_from_string() {
        let uuid = Uuid::new_v4();
        let id: CohortId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn cohort_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<CohortId>().is_err());
    }

    #[test]
    fn cohort_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = CohortId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn session_and_student_ids_display_inner_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(CohortSessionId::from_uuid(uuid).to_string(), uuid.to_string());
        assert_eq!(StudentId::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
