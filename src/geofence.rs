//! Attendance check-in screening.
//!
//! Scores a check-in by haversine distance from the session's registered
//! center, and by the travel velocity implied against the student's previous
//! check-in. Both checks are advisory: they annotate the check-in for human
//! review and never block it, since GPS noise produces false positives.
//!
//! Each call is a pure function over its arguments — safe for concurrent
//! invocation across check-ins.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky & Telescope 68(2)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points in meters.
pub fn haversine_distance_m(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    EARTH_RADIUS_M * 2.0 * a.sqrt().asin()
}

/// One attendance check-in event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Attendance session identifier.
    pub session_id: String,
    /// Student identifier.
    pub student_id: String,
    /// When the check-in was recorded.
    pub timestamp: DateTime<Utc>,
    /// Reported device position.
    pub coordinates: Coordinates,
    /// Device-reported GPS accuracy radius in meters.
    pub accuracy_m: Option<f64>,
}

impl CheckIn {
    /// Creates a check-in without accuracy information.
    pub fn new(
        session_id: impl Into<String>,
        student_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            student_id: student_id.into(),
            timestamp,
            coordinates,
            accuracy_m: None,
        }
    }

    /// Sets the reported GPS accuracy.
    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }
}

/// Thresholds for the velocity check.
///
/// Explicit configuration rather than ambient state, so the evaluator stays
/// testable and side-effect-free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofencePolicy {
    /// Fastest plausible travel between consecutive check-ins (m/s).
    pub max_velocity_mps: f64,
    /// Previous check-ins older than this are not velocity-checked (seconds).
    pub velocity_window_secs: i64,
}

impl Default for GeofencePolicy {
    /// 50 m/s (~180 km/h) over a 30-minute window.
    fn default() -> Self {
        Self {
            max_velocity_mps: 50.0,
            velocity_window_secs: 1800,
        }
    }
}

/// Screening verdict for one check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInAssessment {
    /// Haversine distance from the session center in meters.
    pub distance_from_center_m: f64,
    /// Velocity implied by the previous check-in, when one qualified (m/s).
    pub implied_velocity_mps: Option<f64>,
    /// Whether any check fired.
    pub is_flagged: bool,
    /// Human-readable reasons, joined with "; " when both checks fire.
    pub flag_reason: Option<String>,
}

/// Stateless check-in screener.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeofenceEvaluator {
    policy: GeofencePolicy,
}

impl GeofenceEvaluator {
    /// Creates an evaluator with the given thresholds.
    pub fn new(policy: GeofencePolicy) -> Self {
        Self { policy }
    }

    /// Scores one check-in against the session geofence and the student's
    /// previous check-in.
    ///
    /// The device-reported accuracy radius is subtracted from the center
    /// distance before the geofence comparison, so a noisy fix just outside
    /// the boundary is not flagged; the raw distance is still reported. The
    /// velocity check uses raw coordinates.
    pub fn evaluate(
        &self,
        check_in: &CheckIn,
        session_center: Coordinates,
        geofence_radius_m: f64,
        previous: Option<&CheckIn>,
    ) -> CheckInAssessment {
        let distance = haversine_distance_m(check_in.coordinates, session_center);
        let mut reasons: Vec<String> = Vec::new();

        let slack = check_in.accuracy_m.unwrap_or(0.0).max(0.0);
        if (distance - slack).max(0.0) > geofence_radius_m {
            reasons.push(format!(
                "check-in is {distance:.0} m from the session center, outside the {geofence_radius_m:.0} m geofence"
            ));
        }

        let implied_velocity = previous.and_then(|prev| self.implied_velocity(prev, check_in));
        if let Some(velocity) = implied_velocity {
            if velocity > self.policy.max_velocity_mps {
                reasons.push(format!(
                    "implied travel velocity {:.1} m/s exceeds the {:.1} m/s plausibility limit",
                    velocity, self.policy.max_velocity_mps
                ));
            }
        }

        CheckInAssessment {
            distance_from_center_m: distance,
            implied_velocity_mps: implied_velocity,
            is_flagged: !reasons.is_empty(),
            flag_reason: if reasons.is_empty() {
                None
            } else {
                Some(reasons.join("; "))
            },
        }
    }

    /// Velocity implied by the hop from `prev`, when it happened inside the
    /// velocity window. Non-positive elapsed time yields no velocity.
    fn implied_velocity(&self, prev: &CheckIn, current: &CheckIn) -> Option<f64> {
        let elapsed = (current.timestamp - prev.timestamp).num_seconds();
        if elapsed <= 0 || elapsed > self.policy.velocity_window_secs {
            return None;
        }
        let hop = haversine_distance_m(prev.coordinates, current.coordinates);
        Some(hop / elapsed as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn check_in(student: &str, secs: i64, lat: f64, lng: f64) -> CheckIn {
        CheckIn::new("sess-1", student, ts(secs), Coordinates::new(lat, lng))
    }

    #[test]
    fn test_haversine_known_distance() {
        // Ankara to Istanbul, roughly 351 km great-circle.
        let ankara = Coordinates::new(39.9334, 32.8597);
        let istanbul = Coordinates::new(41.0082, 28.9784);

        let distance_km = haversine_distance_m(ankara, istanbul) / 1000.0;
        assert!((distance_km - 351.0).abs() < 5.0);
    }

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinates::new(39.9, 32.8);
        assert!(haversine_distance_m(p, p).abs() < 0.001);
    }

    #[test]
    fn test_far_check_in_is_flagged() {
        // ~500 m north of the center, 15 m geofence.
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let ci = check_in("stu-1", 0, 0.0045, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 15.0, None);
        assert!(assessment.is_flagged);
        assert!((assessment.distance_from_center_m - 500.0).abs() < 10.0);
        let reason = assessment.flag_reason.unwrap();
        assert!(reason.contains("from the session center"));
    }

    #[test]
    fn test_near_check_in_is_clean() {
        // ~10 m from the center.
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let ci = check_in("stu-1", 0, 0.00009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 15.0, None);
        assert!(!assessment.is_flagged);
        assert!(assessment.flag_reason.is_none());
        assert!(assessment.distance_from_center_m < 15.0);
    }

    #[test]
    fn test_accuracy_slack_forgives_boundary_noise() {
        // ~20 m out with a 10 m accuracy radius against a 15 m geofence.
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let ci = check_in("stu-1", 0, 0.00018, 0.0).with_accuracy(10.0);

        let assessment = evaluator.evaluate(&ci, center, 15.0, None);
        assert!(!assessment.is_flagged);
    }

    #[test]
    fn test_implausible_velocity_is_flagged() {
        // ~1000 m hop in 10 seconds: 100 m/s.
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let prev = check_in("stu-1", 0, 0.0, 0.0);
        let ci = check_in("stu-1", 10, 0.009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 5000.0, Some(&prev));
        assert!(assessment.is_flagged);
        let velocity = assessment.implied_velocity_mps.unwrap();
        assert!((velocity - 100.0).abs() < 2.0);
        assert!(assessment.flag_reason.unwrap().contains("velocity"));
    }

    #[test]
    fn test_old_previous_check_in_is_ignored() {
        // Same hop, but an hour apart: outside the velocity window.
        let center = Coordinates::new(0.009, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let prev = check_in("stu-1", 0, 0.0, 0.0);
        let ci = check_in("stu-1", 3600, 0.009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 100.0, Some(&prev));
        assert!(assessment.implied_velocity_mps.is_none());
        assert!(!assessment.is_flagged);
    }

    #[test]
    fn test_simultaneous_check_ins_yield_no_velocity() {
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let prev = check_in("stu-1", 100, 0.0, 0.0);
        let ci = check_in("stu-1", 100, 0.009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 5000.0, Some(&prev));
        assert!(assessment.implied_velocity_mps.is_none());
    }

    #[test]
    fn test_both_reasons_combined() {
        // Far from center AND moving implausibly fast.
        let center = Coordinates::new(0.0, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let prev = check_in("stu-1", 0, 0.0, 0.0);
        let ci = check_in("stu-1", 10, 0.009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 15.0, Some(&prev));
        assert!(assessment.is_flagged);
        let reason = assessment.flag_reason.unwrap();
        assert!(reason.contains("; "));
        assert!(reason.contains("geofence"));
        assert!(reason.contains("velocity"));
    }

    #[test]
    fn test_plausible_velocity_is_clean() {
        // ~1000 m in 15 minutes: walking pace.
        let center = Coordinates::new(0.009, 0.0);
        let evaluator = GeofenceEvaluator::default();
        let prev = check_in("stu-1", 0, 0.0, 0.0);
        let ci = check_in("stu-1", 900, 0.009, 0.0);

        let assessment = evaluator.evaluate(&ci, center, 100.0, Some(&prev));
        let velocity = assessment.implied_velocity_mps.unwrap();
        assert!(velocity < 2.0);
        assert!(!assessment.is_flagged);
    }
}
