//! Campus scheduling domain models.
//!
//! Input snapshots (`Section`, `Classroom`, `SlotCatalogue`) are loaded once
//! per scheduling run and treated as read-only; `ScheduleEntry` is the only
//! entity the engine creates. The caller owns persistence of both.

mod classroom;
mod section;
mod time_slot;
mod timetable;

pub use classroom::Classroom;
pub use section::Section;
pub use time_slot::{DayOfWeek, SlotCatalogue, TimeSlot};
pub use timetable::ScheduleEntry;
