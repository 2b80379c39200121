//! Backtracking assignment engine.
//!
//! Places each section into a (classroom, day, period) slot using
//! chronological backtracking over the candidate domains from
//! [`CandidateGenerator`], pruned through the [`ConflictIndex`].
//!
//! # Algorithm
//!
//! 1. Validate input; invalid input rejects the whole run without searching.
//! 2. Sections whose static domain is empty (no room holds them at any time)
//!    fail immediately and never enter the search.
//! 3. Search: pick the unassigned section with the fewest currently feasible
//!    candidates (fail-first), tie-broken by ascending section id; try its
//!    candidates in generator order; place, recurse, undo on failure. Every
//!    tentative placement is one iteration, every undo after a failed branch
//!    one backtrack, and the deepest placement set reached is snapshotted.
//! 4. If the search space is exhausted without a full assignment, the
//!    weakest section missing from the snapshot is recorded as failed and
//!    the search re-runs on the remainder, until a run completes or the
//!    budget runs out. Partial results, not all-or-nothing.
//! 5. The iteration budget and optional deadline are checked at the top of
//!    every step; on exhaustion the snapshot becomes the result and the
//!    leftover sections fail with a budget reason.
//!
//! Determinism: no wall-clock or hash-map iteration order reaches any
//! decision path, so identical inputs produce identical timetables. The
//! single exception is the reported elapsed time in the statistics.
//!
//! # References
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6.3
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::models::{Classroom, ScheduleEntry, Section, SlotCatalogue};
use crate::validation::validate_input;

use super::{
    Candidate, CandidateGenerator, ConflictIndex, FailedSection, ScheduleOutcome,
    SearchStatistics,
};

/// Default bound on tentative placements per run.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

const REASON_BUDGET: &str = "search budget exhausted";
const REASON_CONFLICT: &str =
    "no available classroom/time slot satisfies capacity and conflict constraints";

/// Input container for one scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Sections to place.
    pub sections: Vec<Section>,
    /// Room pool.
    pub classrooms: Vec<Classroom>,
    /// Allowed periods (defaults to the weekday grid).
    pub catalogue: SlotCatalogue,
    /// Already-committed entries the run must not collide with (e.g.
    /// manually created schedules). Assumed internally consistent.
    pub fixed_entries: Vec<ScheduleEntry>,
    /// Bound on tentative placements.
    pub max_iterations: u64,
    /// Optional wall-clock deadline for the search.
    pub time_limit: Option<Duration>,
}

impl ScheduleRequest {
    /// Creates a request with the default catalogue and iteration budget.
    pub fn new(sections: Vec<Section>, classrooms: Vec<Classroom>) -> Self {
        Self {
            sections,
            classrooms,
            catalogue: SlotCatalogue::default(),
            fixed_entries: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_limit: None,
        }
    }

    /// Sets the allowed time slots.
    pub fn with_catalogue(mut self, catalogue: SlotCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Seeds already-committed entries into the run.
    pub fn with_fixed_entries(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.fixed_entries = entries;
        self
    }

    /// Overrides the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets a wall-clock deadline.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Chronological backtracking timetable scheduler.
///
/// A pure, single-threaded computation per invocation: each run owns its
/// conflict index, performs no I/O, and never mutates its input snapshot.
/// Concurrent runs over disjoint requests are safe.
///
/// # Example
///
/// ```
/// use campus_schedule::models::{Classroom, Section};
/// use campus_schedule::scheduler::{BacktrackingScheduler, ScheduleRequest};
///
/// let sections = vec![
///     Section::new("CS101-1", "CS101", 1, "inst-1").with_capacity(25),
///     Section::new("MA201-1", "MA201", 1, "inst-2").with_capacity(20),
/// ];
/// let classrooms = vec![Classroom::new("R1", "Science Hall", "101", 30)];
/// let request = ScheduleRequest::new(sections, classrooms);
///
/// let outcome = BacktrackingScheduler::new().schedule(&request);
/// assert!(outcome.is_success);
/// assert_eq!(outcome.scheduled_sections, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingScheduler;

impl BacktrackingScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs one scheduling pass and reports the outcome.
    ///
    /// Never panics and never returns `Err`: invalid input comes back as a
    /// rejected outcome, expected infeasibility as per-section failures.
    pub fn schedule(&self, request: &ScheduleRequest) -> ScheduleOutcome {
        let started = Instant::now();

        if let Err(errors) =
            validate_input(&request.sections, &request.classrooms, &request.catalogue)
        {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%message, "scheduling input rejected");
            return ScheduleOutcome::rejected(message);
        }

        debug!(
            sections = request.sections.len(),
            classrooms = request.classrooms.len(),
            slots = request.catalogue.len(),
            fixed = request.fixed_entries.len(),
            "scheduling run started"
        );

        let generator = CandidateGenerator::new(&request.classrooms, &request.catalogue);

        let mut failed: Vec<FailedSection> = Vec::new();
        let mut open: Vec<SearchItem<'_>> = Vec::new();
        for section in &request.sections {
            let domain = generator.domain_for(section);
            if domain.is_empty() {
                failed.push(FailedSection::new(
                    section,
                    generator.empty_domain_reason(section),
                ));
            } else {
                open.push(SearchItem { section, domain });
            }
        }

        let mut index = ConflictIndex::new();
        for entry in &request.fixed_entries {
            index.insert(entry);
        }

        let mut search = Search {
            index,
            placed: Vec::new(),
            best: Vec::new(),
            iterations: 0,
            backtracks: 0,
            max_iterations: request.max_iterations,
            deadline: request.time_limit.map(|limit| started + limit),
            exhausted: false,
        };

        let mut entries: Vec<ScheduleEntry> = Vec::new();
        loop {
            if open.is_empty() {
                break;
            }
            search.placed.clear();
            search.best.clear();

            let mut working: Vec<&SearchItem<'_>> = open.iter().collect();
            if search.solve(&mut working) {
                entries = std::mem::take(&mut search.best);
                break;
            }
            if search.exhausted {
                entries = std::mem::take(&mut search.best);
                let placed: HashSet<&str> =
                    entries.iter().map(|e| e.section_id.as_str()).collect();
                for item in &open {
                    if !placed.contains(item.section.id.as_str()) {
                        failed.push(FailedSection::new(item.section, REASON_BUDGET));
                    }
                }
                break;
            }

            // Search space exhausted without a full assignment: drop the
            // weakest unplaced section and retry on the remainder.
            let Some(culprit_idx) = Self::pick_culprit(&open, &search) else {
                break;
            };
            let item = open.remove(culprit_idx);
            debug!(section = %item.section.id, "section unplaceable, retrying without it");
            failed.push(FailedSection::new(item.section, REASON_CONFLICT));
        }

        entries.sort_by(|a, b| a.section_id.cmp(&b.section_id));
        failed.sort_by(|a, b| a.section_id.cmp(&b.section_id));

        let total = request.sections.len();
        let scheduled = entries.len();
        let unscheduled = failed.len();

        let mut message = if unscheduled == 0 {
            "all sections scheduled".to_string()
        } else {
            format!("scheduled {scheduled} of {total} sections")
        };
        if search.exhausted {
            message.push_str("; search budget exhausted");
        }

        let statistics = SearchStatistics {
            total_iterations: search.iterations,
            backtrack_count: search.backtracks,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        debug!(
            scheduled,
            unscheduled,
            iterations = statistics.total_iterations,
            backtracks = statistics.backtrack_count,
            "scheduling run finished"
        );

        ScheduleOutcome {
            is_success: true,
            message,
            total_sections: total,
            scheduled_sections: scheduled,
            unscheduled_sections: unscheduled,
            generated_schedules: entries,
            failed_sections: failed,
            statistics,
        }
    }

    /// The unplaced section with the fewest root-feasible candidates, ties
    /// by ascending id. `search.index` holds only fixed entries here —
    /// every tentative placement of the failed round has been undone.
    fn pick_culprit(open: &[SearchItem<'_>], search: &Search) -> Option<usize> {
        let placed: HashSet<&str> = search.best.iter().map(|e| e.section_id.as_str()).collect();
        let mut culprit: Option<(usize, usize)> = None;
        for (i, item) in open.iter().enumerate() {
            if placed.contains(item.section.id.as_str()) {
                continue;
            }
            let live = item.live_candidate_count(&search.index);
            let better = match culprit {
                None => true,
                Some((best_i, best_live)) => {
                    live < best_live
                        || (live == best_live && item.section.id < open[best_i].section.id)
                }
            };
            if better {
                culprit = Some((i, live));
            }
        }
        culprit.map(|(i, _)| i)
    }
}

/// One section still to be placed, with its static domain.
#[derive(Debug)]
struct SearchItem<'a> {
    section: &'a Section,
    domain: Vec<Candidate<'a>>,
}

impl SearchItem<'_> {
    fn live_candidate_count(&self, index: &ConflictIndex) -> usize {
        self.domain
            .iter()
            .filter(|c| index.is_free(&c.classroom.id, &self.section.instructor_id, c.slot))
            .count()
    }
}

/// Mutable state of one search: the partial solution and its counters.
/// Exists only for the lifetime of a run; never exposed.
struct Search {
    index: ConflictIndex,
    /// Chronological stack of tentative placements.
    placed: Vec<ScheduleEntry>,
    /// Deepest placement set reached so far.
    best: Vec<ScheduleEntry>,
    iterations: u64,
    backtracks: u64,
    max_iterations: u64,
    deadline: Option<Instant>,
    exhausted: bool,
}

impl Search {
    fn out_of_budget(&self) -> bool {
        self.iterations >= self.max_iterations
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Places every item in `items`, backtracking chronologically.
    ///
    /// Returns `true` when all items are placed. On `false` every placement
    /// made at or below this level has been undone.
    fn solve(&mut self, items: &mut Vec<&SearchItem<'_>>) -> bool {
        if self.out_of_budget() {
            self.exhausted = true;
            return false;
        }
        if items.is_empty() {
            self.best = self.placed.clone();
            return true;
        }

        // Fail-first: fewest live candidates, ties by ascending section id.
        let mut choice: Option<(usize, usize)> = None;
        for (i, item) in items.iter().enumerate() {
            let live = item.live_candidate_count(&self.index);
            let better = match choice {
                None => true,
                Some((best_i, best_live)) => {
                    live < best_live
                        || (live == best_live && item.section.id < items[best_i].section.id)
                }
            };
            if better {
                choice = Some((i, live));
            }
        }
        let Some((i, live_count)) = choice else {
            return false;
        };
        if live_count == 0 {
            return false;
        }

        let item = items.swap_remove(i);
        let live: Vec<Candidate<'_>> = item
            .domain
            .iter()
            .filter(|c| {
                self.index
                    .is_free(&c.classroom.id, &item.section.instructor_id, c.slot)
            })
            .copied()
            .collect();

        for candidate in live {
            if self.out_of_budget() {
                self.exhausted = true;
                break;
            }
            self.iterations += 1;

            let entry = ScheduleEntry::new(item.section, candidate.classroom, *candidate.slot);
            trace!(
                section = %entry.section_id,
                classroom = %entry.classroom_id,
                slot = %entry.time_slot(),
                "tentative placement"
            );
            self.index.insert(&entry);
            self.placed.push(entry);
            if self.placed.len() > self.best.len() {
                self.best = self.placed.clone();
            }

            if self.solve(items) {
                return true;
            }

            if let Some(undone) = self.placed.pop() {
                self.index.remove(&undone);
            }
            if self.exhausted {
                // Budget unwind, not a search backtrack.
                break;
            }
            self.backtracks += 1;
        }

        // Restore the working set to its pre-choice layout.
        items.push(item);
        let last = items.len() - 1;
        items.swap(i, last);
        false
    }
}
