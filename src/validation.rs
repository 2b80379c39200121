//! Input validation for scheduling runs.
//!
//! Checks structural integrity of sections, classrooms, and the slot
//! catalogue before the search starts:
//! - Empty section list, room pool, or catalogue
//! - Duplicate section/classroom IDs
//! - Malformed slots (end at or before start)
//!
//! All problems are collected and reported together. Invalid input rejects
//! the whole run; the engine performs no partial work in that case.

use std::collections::HashSet;

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::{Classroom, DayOfWeek, Section, SlotCatalogue};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A rejected-input condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no sections to schedule")]
    NoSections,
    #[error("classroom pool is empty")]
    NoClassrooms,
    #[error("time slot catalogue is empty")]
    EmptyCatalogue,
    #[error("duplicate section ID: {0}")]
    DuplicateSectionId(String),
    #[error("duplicate classroom ID: {0}")]
    DuplicateClassroomId(String),
    #[error("time slot {day} {start}-{end} ends at or before it starts")]
    MalformedTimeSlot {
        day: DayOfWeek,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// Validates the input snapshot for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    sections: &[Section],
    classrooms: &[Classroom],
    catalogue: &SlotCatalogue,
) -> ValidationResult {
    let mut errors = Vec::new();

    if sections.is_empty() {
        errors.push(ValidationError::NoSections);
    }
    if classrooms.is_empty() {
        errors.push(ValidationError::NoClassrooms);
    }
    if catalogue.is_empty() {
        errors.push(ValidationError::EmptyCatalogue);
    }

    let mut section_ids = HashSet::new();
    for section in sections {
        if !section_ids.insert(section.id.as_str()) {
            errors.push(ValidationError::DuplicateSectionId(section.id.clone()));
        }
    }

    let mut classroom_ids = HashSet::new();
    for classroom in classrooms {
        if !classroom_ids.insert(classroom.id.as_str()) {
            errors.push(ValidationError::DuplicateClassroomId(classroom.id.clone()));
        }
    }

    for slot in catalogue.slots() {
        if !slot.is_well_formed() {
            errors.push(ValidationError::MalformedTimeSlot {
                day: slot.day,
                start: slot.start,
                end: slot.end,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
