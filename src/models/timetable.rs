//! Timetable entry model (the scheduling output entity).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{Classroom, DayOfWeek, Section, TimeSlot};

/// One placed section: classroom, day, and period, with course and
/// instructor fields denormalized for the caller's serializer.
///
/// Invariant over any accepted timetable: no two entries share a classroom
/// or an instructor with overlapping (day, time) intervals, and no section
/// appears more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Placed section identifier.
    pub section_id: String,
    /// Course code of the section.
    pub course_code: String,
    /// Course name of the section.
    pub course_name: String,
    /// Section number within the course.
    pub section_number: i32,
    /// Assigned classroom identifier.
    pub classroom_id: String,
    /// "Building RoomNumber" of the assigned classroom.
    pub classroom_info: String,
    /// Assigned day of week.
    pub day: DayOfWeek,
    /// Period start (inclusive).
    pub start_time: NaiveTime,
    /// Period end (exclusive).
    pub end_time: NaiveTime,
    /// Instructor identifier.
    pub instructor_id: String,
    /// Instructor display name.
    pub instructor_name: String,
}

impl ScheduleEntry {
    /// Assembles an entry from a section, the room it was placed in, and the
    /// chosen period.
    pub fn new(section: &Section, classroom: &Classroom, slot: TimeSlot) -> Self {
        Self {
            section_id: section.id.clone(),
            course_code: section.course_code.clone(),
            course_name: section.course_name.clone(),
            section_number: section.section_number,
            classroom_id: classroom.id.clone(),
            classroom_info: classroom.location(),
            day: slot.day,
            start_time: slot.start,
            end_time: slot.end,
            instructor_id: section.instructor_id.clone(),
            instructor_name: section.instructor_name.clone(),
        }
    }

    /// The occupied period.
    pub fn time_slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.start_time, self.end_time)
    }
}
