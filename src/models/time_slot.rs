//! Day-of-week and time-slot models.
//!
//! A time slot is a (day, start, end) candidate period for one section
//! meeting. The catalogue of allowed periods is configuration supplied by
//! the caller (or the built-in weekday grid) — it is never derived from data.
//!
//! # Interval Semantics
//!
//! Slots are half-open `[start, end)`. Two slots on the same day overlap iff
//! `start1 < end2 && start2 < end1`; touching endpoints (10:00–11:00 followed
//! by 11:00–12:00) do not conflict.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the academic week.
///
/// Ordered Monday-first; candidate enumeration and output sorting rely on
/// this order being stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Teaching days used by the default catalogue.
    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Short display name.
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate period: one day-of-week plus a `[start, end)` time range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Day of week.
    pub day: DayOfWeek,
    /// Period start (inclusive).
    pub start: NaiveTime,
    /// Period end (exclusive).
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: DayOfWeek, start: NaiveTime, end: NaiveTime) -> Self {
        Self { day, start, end }
    }

    /// Whether the interval is well-formed (end strictly after start).
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    /// Slot length in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap on the same day.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

/// The catalogue of allowed candidate periods.
///
/// Kept sorted by (day, start, end); the candidate generator's determinism
/// relies on that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotCatalogue {
    slots: Vec<TimeSlot>,
}

impl SlotCatalogue {
    /// Builds a catalogue from explicit slots, sorting and deduplicating.
    pub fn from_slots(mut slots: Vec<TimeSlot>) -> Self {
        slots.sort();
        slots.dedup();
        Self { slots }
    }

    /// Builds a weekday grid: back-to-back periods of `grain_minutes`,
    /// starting at `window_start`, for as long as they fit before
    /// `window_end`, on Monday through Friday.
    ///
    /// Works in seconds-from-midnight space; `NaiveTime` addition wraps at
    /// midnight.
    pub fn weekday_grid(
        window_start: NaiveTime,
        window_end: NaiveTime,
        grain_minutes: u32,
    ) -> Self {
        let start_s = i64::from(window_start.num_seconds_from_midnight());
        let end_s = i64::from(window_end.num_seconds_from_midnight());
        let grain_s = i64::from(grain_minutes) * 60;

        let mut slots = Vec::new();
        if grain_s > 0 {
            for day in DayOfWeek::WEEKDAYS {
                let mut t = start_s;
                while t + grain_s <= end_s {
                    if let (Some(start), Some(end)) = (time_of(t), time_of(t + grain_s)) {
                        slots.push(TimeSlot::new(day, start, end));
                    }
                    t += grain_s;
                }
            }
        }

        // Generation order is already (day, start) ascending.
        Self { slots }
    }

    /// The slots, sorted by (day, start, end).
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of candidate periods.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the catalogue has no periods.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalogue {
    /// Monday–Friday, 08:00–22:00, 60-minute periods.
    fn default() -> Self {
        Self::weekday_grid(hm(8, 0), hm(22, 0), 60)
    }
}

fn time_of(seconds: i64) -> Option<NaiveTime> {
    u32::try_from(seconds)
        .ok()
        .and_then(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0))
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("in-range time literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_overlap_same_day() {
        let a = TimeSlot::new(DayOfWeek::Monday, t(9, 0), t(10, 30));
        let b = TimeSlot::new(DayOfWeek::Monday, t(10, 0), t(11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = TimeSlot::new(DayOfWeek::Monday, t(10, 0), t(11, 0));
        let b = TimeSlot::new(DayOfWeek::Monday, t(11, 0), t(12, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_across_days() {
        let a = TimeSlot::new(DayOfWeek::Monday, t(9, 0), t(10, 0));
        let b = TimeSlot::new(DayOfWeek::Tuesday, t(9, 0), t(10, 0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_duration_and_well_formed() {
        let slot = TimeSlot::new(DayOfWeek::Friday, t(13, 0), t(14, 30));
        assert_eq!(slot.duration_minutes(), 90);
        assert!(slot.is_well_formed());

        let bad = TimeSlot::new(DayOfWeek::Friday, t(14, 0), t(14, 0));
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_default_catalogue() {
        let catalogue = SlotCatalogue::default();
        // 14 one-hour periods per day, 5 days.
        assert_eq!(catalogue.len(), 70);

        let first = catalogue.slots()[0];
        assert_eq!(first.day, DayOfWeek::Monday);
        assert_eq!(first.start, t(8, 0));
        assert_eq!(first.end, t(9, 0));

        let last = catalogue.slots()[69];
        assert_eq!(last.day, DayOfWeek::Friday);
        assert_eq!(last.start, t(21, 0));
    }

    #[test]
    fn test_weekday_grid_partial_period_dropped() {
        // 08:00-10:30 with 90-minute grain: only 08:00-09:30 fits.
        let catalogue = SlotCatalogue::weekday_grid(t(8, 0), t(10, 30), 90);
        assert_eq!(catalogue.len(), 5);
        assert!(catalogue
            .slots()
            .iter()
            .all(|s| s.start == t(8, 0) && s.end == t(9, 30)));
    }

    #[test]
    fn test_weekday_grid_zero_grain_is_empty() {
        let catalogue = SlotCatalogue::weekday_grid(t(8, 0), t(22, 0), 0);
        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_from_slots_sorts_and_dedups() {
        let catalogue = SlotCatalogue::from_slots(vec![
            TimeSlot::new(DayOfWeek::Wednesday, t(9, 0), t(10, 0)),
            TimeSlot::new(DayOfWeek::Monday, t(10, 0), t(11, 0)),
            TimeSlot::new(DayOfWeek::Monday, t(8, 0), t(9, 0)),
            TimeSlot::new(DayOfWeek::Monday, t(8, 0), t(9, 0)),
        ]);

        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.slots()[0].start, t(8, 0));
        assert_eq!(catalogue.slots()[1].start, t(10, 0));
        assert_eq!(catalogue.slots()[2].day, DayOfWeek::Wednesday);
    }

    #[test]
    fn test_day_ordering() {
        assert!(DayOfWeek::Monday < DayOfWeek::Friday);
        assert!(DayOfWeek::Friday < DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Thursday.to_string(), "Thu");
    }
}
