//! Post-hoc timetable verification.
//!
//! Re-checks a finished entry set against the timetable invariant: no
//! classroom or instructor holds two overlapping entries, and no section
//! appears twice. Callers run this before persisting a generated timetable
//! next to manually created rows; the engine's own tests use it to verify
//! every produced schedule.
//!
//! The scan is pairwise O(n²) over entries — the audit runs once per
//! accepted timetable, not inside the search loop.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleEntry;

/// Classification of a detected collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Two entries occupy the same classroom at overlapping times.
    Classroom,
    /// One instructor teaches two overlapping entries.
    Instructor,
    /// The same section appears more than once.
    DuplicateSection,
}

/// A pair of entries violating the timetable invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableConflict {
    pub kind: ConflictKind,
    pub first_section: String,
    pub second_section: String,
    /// Human-readable description.
    pub message: String,
}

/// Pairwise audit of a finished timetable.
#[derive(Debug, Clone, Default)]
pub struct TimetableAudit {
    /// Detected violations, in entry order.
    pub conflicts: Vec<TimetableConflict>,
}

impl TimetableAudit {
    /// Audits an entry set.
    pub fn of(entries: &[ScheduleEntry]) -> Self {
        let mut conflicts = Vec::new();

        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if a.section_id == b.section_id {
                    conflicts.push(TimetableConflict {
                        kind: ConflictKind::DuplicateSection,
                        first_section: a.section_id.clone(),
                        second_section: b.section_id.clone(),
                        message: format!(
                            "section '{}' is scheduled more than once",
                            a.section_id
                        ),
                    });
                    continue;
                }
                if !a.time_slot().overlaps(&b.time_slot()) {
                    continue;
                }
                if a.classroom_id == b.classroom_id {
                    conflicts.push(TimetableConflict {
                        kind: ConflictKind::Classroom,
                        first_section: a.section_id.clone(),
                        second_section: b.section_id.clone(),
                        message: format!(
                            "classroom '{}' double-booked: '{}' {} vs '{}' {}",
                            a.classroom_id,
                            a.section_id,
                            a.time_slot(),
                            b.section_id,
                            b.time_slot()
                        ),
                    });
                }
                if a.instructor_id == b.instructor_id {
                    conflicts.push(TimetableConflict {
                        kind: ConflictKind::Instructor,
                        first_section: a.section_id.clone(),
                        second_section: b.section_id.clone(),
                        message: format!(
                            "instructor '{}' double-booked: '{}' {} vs '{}' {}",
                            a.instructor_id,
                            a.section_id,
                            a.time_slot(),
                            b.section_id,
                            b.time_slot()
                        ),
                    });
                }
            }
        }

        Self { conflicts }
    }

    /// Whether the invariant holds.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry(
        section_id: &str,
        classroom_id: &str,
        instructor_id: &str,
        day: DayOfWeek,
        start: NaiveTime,
        end: NaiveTime,
    ) -> ScheduleEntry {
        ScheduleEntry {
            section_id: section_id.into(),
            course_code: "CS101".into(),
            course_name: String::new(),
            section_number: 1,
            classroom_id: classroom_id.into(),
            classroom_info: String::new(),
            day,
            start_time: start,
            end_time: end,
            instructor_id: instructor_id.into(),
            instructor_name: String::new(),
        }
    }

    #[test]
    fn test_clean_timetable() {
        let entries = vec![
            entry("S1", "R1", "i1", DayOfWeek::Monday, t(9, 0), t(10, 0)),
            entry("S2", "R1", "i1", DayOfWeek::Monday, t(10, 0), t(11, 0)),
            entry("S3", "R2", "i2", DayOfWeek::Monday, t(9, 0), t(10, 0)),
        ];
        let audit = TimetableAudit::of(&entries);
        assert!(audit.is_clean());
    }

    #[test]
    fn test_classroom_collision() {
        let entries = vec![
            entry("S1", "R1", "i1", DayOfWeek::Monday, t(9, 0), t(10, 0)),
            entry("S2", "R1", "i2", DayOfWeek::Monday, t(9, 30), t(10, 30)),
        ];
        let audit = TimetableAudit::of(&entries);
        assert_eq!(audit.conflicts.len(), 1);
        assert_eq!(audit.conflicts[0].kind, ConflictKind::Classroom);
        assert!(audit.conflicts[0].message.contains("R1"));
    }

    #[test]
    fn test_instructor_collision_across_rooms() {
        let entries = vec![
            entry("S1", "R1", "i1", DayOfWeek::Tuesday, t(9, 0), t(10, 0)),
            entry("S2", "R2", "i1", DayOfWeek::Tuesday, t(9, 0), t(10, 0)),
        ];
        let audit = TimetableAudit::of(&entries);
        assert_eq!(audit.conflicts.len(), 1);
        assert_eq!(audit.conflicts[0].kind, ConflictKind::Instructor);
    }

    #[test]
    fn test_duplicate_section() {
        let entries = vec![
            entry("S1", "R1", "i1", DayOfWeek::Monday, t(9, 0), t(10, 0)),
            entry("S1", "R2", "i1", DayOfWeek::Friday, t(9, 0), t(10, 0)),
        ];
        let audit = TimetableAudit::of(&entries);
        assert_eq!(audit.conflicts.len(), 1);
        assert_eq!(audit.conflicts[0].kind, ConflictKind::DuplicateSection);
    }

    #[test]
    fn test_same_room_same_time_both_axes() {
        // Same room AND same instructor overlapping: both kinds reported.
        let entries = vec![
            entry("S1", "R1", "i1", DayOfWeek::Monday, t(9, 0), t(10, 0)),
            entry("S2", "R1", "i1", DayOfWeek::Monday, t(9, 0), t(10, 0)),
        ];
        let audit = TimetableAudit::of(&entries);
        assert_eq!(audit.conflicts.len(), 2);
    }
}
