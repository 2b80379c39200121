//! Course section model.
//!
//! A section is one offered instance of a course for a semester, taught by a
//! single instructor. Sections are input snapshots: the scheduler never
//! mutates them, which keeps repeated runs over the same data reproducible.

use serde::{Deserialize, Serialize};

/// A course section to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Course code (e.g. "CS101").
    pub course_code: String,
    /// Human-readable course name.
    pub course_name: String,
    /// Section number within the course.
    pub section_number: i32,
    /// Identifier of the teaching instructor.
    pub instructor_id: String,
    /// Instructor display name (empty when unknown).
    pub instructor_name: String,
    /// Enrollment capacity (seats offered).
    pub capacity: i32,
    /// Students currently enrolled.
    pub enrolled: i32,
    /// Minimum classroom capacity this section accepts.
    pub required_capacity: i32,
    /// Feature keys the classroom must provide (e.g. "projector", "lab").
    pub required_features: Vec<String>,
}

impl Section {
    /// Creates a new section.
    pub fn new(
        id: impl Into<String>,
        course_code: impl Into<String>,
        section_number: i32,
        instructor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_code: course_code.into(),
            course_name: String::new(),
            section_number,
            instructor_id: instructor_id.into(),
            instructor_name: String::new(),
            capacity: 0,
            enrolled: 0,
            required_capacity: 0,
            required_features: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Sets the instructor display name.
    pub fn with_instructor_name(mut self, name: impl Into<String>) -> Self {
        self.instructor_name = name.into();
        self
    }

    /// Sets the enrollment capacity and, by default, the required classroom
    /// capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self.required_capacity = capacity;
        self
    }

    /// Overrides the required classroom capacity (call after
    /// [`with_capacity`](Self::with_capacity)).
    pub fn with_required_capacity(mut self, required: i32) -> Self {
        self.required_capacity = required;
        self
    }

    /// Sets the current enrollment count.
    pub fn with_enrolled(mut self, enrolled: i32) -> Self {
        self.enrolled = enrolled;
        self
    }

    /// Adds a required classroom feature key.
    pub fn with_required_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_features.push(feature.into());
        self
    }

    /// Seats the assigned classroom must hold.
    ///
    /// An over-enrolled section must not land in a room smaller than its
    /// actual headcount.
    pub fn seats_required(&self) -> i32 {
        self.required_capacity.max(self.enrolled)
    }
}
