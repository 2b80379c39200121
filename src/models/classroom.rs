//! Classroom model.
//!
//! Classrooms form the read-only room pool for a scheduling run: seating
//! capacity plus free-form feature flags (projector, lab equipment, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A classroom available for section placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Building name.
    pub building: String,
    /// Room number within the building.
    pub room_number: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Free-form feature flags (key plus descriptive value).
    pub features: HashMap<String, String>,
}

impl Classroom {
    /// Creates a new classroom.
    pub fn new(
        id: impl Into<String>,
        building: impl Into<String>,
        room_number: impl Into<String>,
        capacity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            building: building.into(),
            room_number: room_number.into(),
            capacity,
            features: HashMap::new(),
        }
    }

    /// Adds a feature flag.
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.features.insert(key.into(), value.into());
        self
    }

    /// Whether this room carries a feature key.
    pub fn has_feature(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    /// Whether this room provides every required feature key.
    pub fn supports(&self, required: &[String]) -> bool {
        required.iter().all(|f| self.features.contains_key(f))
    }

    /// "Building RoomNumber" display string for reporting.
    pub fn location(&self) -> String {
        format!("{} {}", self.building, self.room_number)
    }
}
