//! Scheduling run results.
//!
//! The outcome is the whole surface handed back to the surrounding service
//! layer: placed entries, per-section failures with reasons, and search
//! effort counters. Expected infeasibility (an unplaceable section) is data
//! here, never an error.

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleEntry, Section};

/// Search effort counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Tentative placements attempted.
    pub total_iterations: u64,
    /// Placements undone after a failed branch.
    pub backtrack_count: u64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}

/// A section the run could not place, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedSection {
    pub section_id: String,
    pub course_code: String,
    pub course_name: String,
    pub section_number: i32,
    /// Human-readable explanation of the failure.
    pub reason: String,
}

impl FailedSection {
    /// Records `section` as unplaced for `reason`.
    pub fn new(section: &Section, reason: impl Into<String>) -> Self {
        Self {
            section_id: section.id.clone(),
            course_code: section.course_code.clone(),
            course_name: section.course_name.clone(),
            section_number: section.section_number,
            reason: reason.into(),
        }
    }
}

/// Result of one scheduling run.
///
/// `is_success` reflects whether the engine ran at all: invalid input is the
/// only whole-operation failure. Unplaced sections and budget exhaustion are
/// degraded success, visible through `failed_sections` and `statistics`
/// rather than the flag.
///
/// Invariant: `scheduled_sections + unscheduled_sections == total_sections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub is_success: bool,
    pub message: String,
    pub total_sections: usize,
    pub scheduled_sections: usize,
    pub unscheduled_sections: usize,
    /// Placed entries, sorted by section id.
    pub generated_schedules: Vec<ScheduleEntry>,
    /// Unplaced sections with reasons, sorted by section id.
    pub failed_sections: Vec<FailedSection>,
    pub statistics: SearchStatistics,
}

impl ScheduleOutcome {
    /// Whole-operation rejection (invalid input; no partial work performed).
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            total_sections: 0,
            scheduled_sections: 0,
            unscheduled_sections: 0,
            generated_schedules: Vec::new(),
            failed_sections: Vec::new(),
            statistics: SearchStatistics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_outcome() {
        let outcome = ScheduleOutcome::rejected("no sections to schedule");
        assert!(!outcome.is_success);
        assert_eq!(outcome.message, "no sections to schedule");
        assert_eq!(outcome.total_sections, 0);
        assert!(outcome.generated_schedules.is_empty());
        assert_eq!(outcome.statistics, SearchStatistics::default());
    }

    #[test]
    fn test_failed_section_copies_identity() {
        let section = Section::new("S1", "CS101", 3, "i1").with_course_name("Intro");
        let failed = FailedSection::new(&section, "search budget exhausted");
        assert_eq!(failed.section_id, "S1");
        assert_eq!(failed.course_code, "CS101");
        assert_eq!(failed.course_name, "Intro");
        assert_eq!(failed.section_number, 3);
        assert_eq!(failed.reason, "search budget exhausted");
    }
}
