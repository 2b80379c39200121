//! Timetable construction engine.
//!
//! The scheduler is a constraint-satisfaction search: candidate (classroom,
//! period) domains come from [`CandidateGenerator`], overlap pruning from
//! [`ConflictIndex`], and [`BacktrackingScheduler`] runs chronological
//! backtracking with a fail-first variable order over them. The result
//! surface is [`ScheduleOutcome`]; [`TimetableAudit`] re-verifies a finished
//! timetable.
//!
//! # Usage
//!
//! ```
//! use campus_schedule::models::{Classroom, Section};
//! use campus_schedule::scheduler::{BacktrackingScheduler, ScheduleRequest};
//!
//! let sections = vec![Section::new("CS101-1", "CS101", 1, "inst-1").with_capacity(30)];
//! let classrooms = vec![Classroom::new("R1", "Main", "101", 40)];
//!
//! let outcome = BacktrackingScheduler::new().schedule(&ScheduleRequest::new(sections, classrooms));
//! assert_eq!(outcome.scheduled_sections, 1);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

mod audit;
mod candidates;
mod conflict;
mod engine;
mod outcome;

pub use audit::{ConflictKind, TimetableAudit, TimetableConflict};
pub use candidates::{Candidate, CandidateGenerator};
pub use conflict::ConflictIndex;
pub use engine::{BacktrackingScheduler, ScheduleRequest, DEFAULT_MAX_ITERATIONS};
pub use outcome::{FailedSection, ScheduleOutcome, SearchStatistics};
