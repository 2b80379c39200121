//! Candidate slot enumeration.
//!
//! Produces each section's placement domain: classrooms that hold the
//! section crossed with the slot catalogue. Ordering is fixed — ascending
//! classroom id, then day, then start time — so identical inputs explore
//! identical search trees.

use crate::models::{Classroom, Section, SlotCatalogue, TimeSlot};

/// A feasible (classroom, period) pair for some section.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Room the section would occupy.
    pub classroom: &'a Classroom,
    /// Period the section would occupy.
    pub slot: &'a TimeSlot,
}

/// Enumerates placement domains over a fixed room pool and catalogue.
#[derive(Debug)]
pub struct CandidateGenerator<'a> {
    classrooms: Vec<&'a Classroom>,
    catalogue: &'a SlotCatalogue,
}

impl<'a> CandidateGenerator<'a> {
    /// Captures the room pool (sorted by id) and the catalogue.
    pub fn new(classrooms: &'a [Classroom], catalogue: &'a SlotCatalogue) -> Self {
        let mut classrooms: Vec<&Classroom> = classrooms.iter().collect();
        classrooms.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            classrooms,
            catalogue,
        }
    }

    /// The full feasible domain for `section`, ignoring current bookings.
    ///
    /// Capacity feasibility: room capacity must cover
    /// [`seats_required`](Section::seats_required), and the room's feature
    /// set must be a superset of the section's requirements.
    pub fn domain_for(&self, section: &Section) -> Vec<Candidate<'a>> {
        let mut domain = Vec::new();
        for &classroom in &self.classrooms {
            if !Self::fits(classroom, section) {
                continue;
            }
            for slot in self.catalogue.slots() {
                domain.push(Candidate { classroom, slot });
            }
        }
        domain
    }

    /// Why `section`'s domain is empty, as a caller-facing reason.
    pub fn empty_domain_reason(&self, section: &Section) -> String {
        if !self
            .classrooms
            .iter()
            .any(|c| c.capacity >= section.seats_required())
        {
            format!(
                "no classroom meets the required capacity of {}",
                section.seats_required()
            )
        } else if !self.classrooms.iter().any(|c| Self::fits(c, section)) {
            format!(
                "no classroom provides required features: {}",
                section.required_features.join(", ")
            )
        } else {
            "no candidate time slots available".to_string()
        }
    }

    fn fits(classroom: &Classroom, section: &Section) -> bool {
        classroom.capacity >= section.seats_required()
            && classroom.supports(&section.required_features)
    }
}
