//! Conflict index over placed timetable entries.
//!
//! Buckets placed entries per classroom and per instructor, each bucket kept
//! sorted by (day, start) so overlap scans can stop early. Insertion locates
//! its position by binary search; the overlap scan within a bucket is linear.
//! At campus scale (a few hundred sections per run, far fewer per room or
//! instructor) the linear scan is a complexity choice, not a correctness
//! one — an interval tree would change none of the answers.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::models::{DayOfWeek, ScheduleEntry, TimeSlot};

/// One reserved period inside a bucket.
#[derive(Debug, Clone)]
struct Booking {
    /// Section id of the entry holding the reservation.
    entry_id: String,
    slot: TimeSlot,
}

/// In-memory overlap index for tentative and fixed placements.
///
/// The engine inserts and retracts tentative assignments repeatedly while
/// backtracking; each scheduling run owns its own index, so concurrent runs
/// never share mutable state.
#[derive(Debug, Default)]
pub struct ConflictIndex {
    by_classroom: HashMap<String, Vec<Booking>>,
    by_instructor: HashMap<String, Vec<Booking>>,
}

impl ConflictIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.by_classroom.values().map(Vec::len).sum()
    }

    /// Whether no entries are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_classroom.values().all(Vec::is_empty)
    }

    /// Indexes a placed entry under its classroom and instructor.
    pub fn insert(&mut self, entry: &ScheduleEntry) {
        Self::insert_into(
            self.by_classroom
                .entry(entry.classroom_id.clone())
                .or_default(),
            entry,
        );
        Self::insert_into(
            self.by_instructor
                .entry(entry.instructor_id.clone())
                .or_default(),
            entry,
        );
    }

    /// Removes a previously inserted entry (backtracking undo).
    pub fn remove(&mut self, entry: &ScheduleEntry) {
        if let Some(bucket) = self.by_classroom.get_mut(&entry.classroom_id) {
            bucket.retain(|b| b.entry_id != entry.section_id);
        }
        if let Some(bucket) = self.by_instructor.get_mut(&entry.instructor_id) {
            bucket.retain(|b| b.entry_id != entry.section_id);
        }
    }

    /// Whether `[start, end)` on `day` collides with a booking in the given
    /// classroom. `exclude` skips one entry by section id, for re-validating
    /// an existing entry against the rest of the timetable.
    pub fn has_classroom_conflict(
        &self,
        classroom_id: &str,
        day: DayOfWeek,
        start: NaiveTime,
        end: NaiveTime,
        exclude: Option<&str>,
    ) -> bool {
        Self::bucket_conflicts(self.by_classroom.get(classroom_id), day, start, end, exclude)
    }

    /// Instructor-scoped analogue of
    /// [`has_classroom_conflict`](Self::has_classroom_conflict).
    pub fn has_instructor_conflict(
        &self,
        instructor_id: &str,
        day: DayOfWeek,
        start: NaiveTime,
        end: NaiveTime,
        exclude: Option<&str>,
    ) -> bool {
        Self::bucket_conflicts(
            self.by_instructor.get(instructor_id),
            day,
            start,
            end,
            exclude,
        )
    }

    /// Whether a candidate placement is free on both axes.
    pub fn is_free(&self, classroom_id: &str, instructor_id: &str, slot: &TimeSlot) -> bool {
        !self.has_classroom_conflict(classroom_id, slot.day, slot.start, slot.end, None)
            && !self.has_instructor_conflict(instructor_id, slot.day, slot.start, slot.end, None)
    }

    fn insert_into(bucket: &mut Vec<Booking>, entry: &ScheduleEntry) {
        let slot = entry.time_slot();
        let key = (slot.day, slot.start);
        let pos = bucket.partition_point(|b| (b.slot.day, b.slot.start) <= key);
        bucket.insert(
            pos,
            Booking {
                entry_id: entry.section_id.clone(),
                slot,
            },
        );
    }

    fn bucket_conflicts(
        bucket: Option<&Vec<Booking>>,
        day: DayOfWeek,
        start: NaiveTime,
        end: NaiveTime,
        exclude: Option<&str>,
    ) -> bool {
        let Some(bucket) = bucket else {
            return false;
        };
        let probe = TimeSlot::new(day, start, end);
        for booking in bucket {
            // Sorted by (day, start): everything from here on starts at or
            // after the probe's end.
            if (booking.slot.day, booking.slot.start) >= (day, end) {
                break;
            }
            if exclude.is_some_and(|id| id == booking.entry_id) {
                continue;
            }
            if booking.slot.overlaps(&probe) {
                return true;
            }
        }
        false
    }
}
