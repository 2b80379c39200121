//! Campus timetabling and attendance-screening core.
//!
//! Implements the two algorithmic centers of a campus-management backend:
//! a constraint-satisfaction timetable builder that places course sections
//! into (classroom, day, period) slots without classroom or instructor
//! collisions, and a geofence evaluator that screens attendance check-ins
//! by distance and implied travel velocity.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `Classroom`, `TimeSlot`,
//!   `SlotCatalogue`, `ScheduleEntry`
//! - **`validation`**: Input integrity checks (empty catalogues, duplicate
//!   IDs, malformed slots)
//! - **`scheduler`**: Backtracking engine, conflict index, candidate
//!   generation, outcome reporting, and timetable audit
//! - **`geofence`**: Haversine distance and velocity screening of check-ins
//!
//! # Design
//!
//! The engine is a pure synchronous computation. All section, classroom, and
//! slot data is materialized before a run starts; nothing is persisted, and
//! identical inputs produce identical timetables. Persistence, transport,
//! and identity are the surrounding service layer's concern.
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Sinnott (1984), "Virtues of the Haversine"

pub mod geofence;
pub mod models;
pub mod scheduler;
pub mod validation;
