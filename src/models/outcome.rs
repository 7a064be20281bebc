//! Allocation outcome model.
//!
//! A generation run produces an ordered list of placements plus an
//! ordered list of failure notices. One placement is emitted per
//! (activity, required resource) pair; the records for one activity all
//! share the same day and hour span. Presentation and export
//! collaborators consume these records as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Weekday;

/// A committed booking of one resource for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Name of the placed activity.
    pub activity_name: String,
    /// Day of the booked block.
    pub day: Weekday,
    /// First booked hour (inclusive).
    pub start_hour: u8,
    /// End of the booked block (exclusive).
    pub end_hour: u8,
    /// The booked resource.
    pub resource_name: String,
}

impl Placement {
    /// Creates a new placement record.
    pub fn new(
        activity_name: impl Into<String>,
        day: Weekday,
        start_hour: u8,
        end_hour: u8,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            activity_name: activity_name.into(),
            day,
            start_hour,
            end_hour,
            resource_name: resource_name.into(),
        }
    }

    /// Booked length in whole hours.
    #[inline]
    pub fn duration_hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether two placements book overlapping hour spans on the same day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_hour < other.end_hour
            && other.start_hour < self.end_hour
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {:02}:00-{:02}:00 ({})",
            self.activity_name, self.day, self.start_hour, self.end_hour, self.resource_name
        )
    }
}

/// Notice that an activity could not be placed.
///
/// Emitted exactly when the activity had zero feasible candidates at the
/// moment it was processed; later activities are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureNotice {
    /// Name of the unplaced activity.
    pub activity_name: String,
    /// The duration that could not be accommodated (hours).
    pub duration_hours: u32,
    /// Human-readable cause.
    pub reason: String,
}

impl FailureNotice {
    /// Creates a notice with the standard no-consecutive-slots cause.
    pub fn unschedulable(activity_name: impl Into<String>, duration_hours: u32) -> Self {
        Self {
            activity_name: activity_name.into(),
            duration_hours,
            reason: "not enough consecutive slots available for all resources".into(),
        }
    }
}

impl fmt::Display for FailureNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to schedule '{}' ({}h): {}",
            self.activity_name, self.duration_hours, self.reason
        )
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Committed placements, in activity processing order.
    pub placements: Vec<Placement>,
    /// Activities that could not be placed, in processing order.
    pub failures: Vec<FailureNotice>,
}

impl AllocationOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placement.
    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Adds a failure notice.
    pub fn add_failure(&mut self, failure: FailureNotice) {
        self.failures.push(failure);
    }

    /// Whether every requested activity was placed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns all placements for a given activity.
    pub fn placements_for_activity(&self, activity_name: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.activity_name == activity_name)
            .collect()
    }

    /// Returns all placements booking a given resource.
    pub fn placements_for_resource(&self, resource_name: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.resource_name == resource_name)
            .collect()
    }

    /// Returns all placements on a given day.
    pub fn placements_on(&self, day: Weekday) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.day == day).collect()
    }

    /// Number of placement records.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> AllocationOutcome {
        let mut o = AllocationOutcome::new();
        o.add_placement(Placement::new("Standup", Weekday::Monday, 9, 10, "RoomA"));
        o.add_placement(Placement::new("Standup", Weekday::Monday, 9, 10, "Alice"));
        o.add_placement(Placement::new("Review", Weekday::Tuesday, 14, 16, "RoomA"));
        o
    }

    #[test]
    fn test_placement_duration() {
        let p = Placement::new("Review", Weekday::Tuesday, 14, 16, "RoomA");
        assert_eq!(p.duration_hours(), 2);
    }

    #[test]
    fn test_placement_overlap() {
        let a = Placement::new("A", Weekday::Monday, 9, 11, "RoomA");
        let b = Placement::new("B", Weekday::Monday, 10, 12, "RoomA");
        let c = Placement::new("C", Weekday::Monday, 11, 12, "RoomA");
        let d = Placement::new("D", Weekday::Tuesday, 9, 11, "RoomA");

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // touching, not overlapping
        assert!(!a.overlaps(&d)); // different day
    }

    #[test]
    fn test_outcome_queries() {
        let o = sample_outcome();
        assert_eq!(o.placement_count(), 3);
        assert_eq!(o.placements_for_activity("Standup").len(), 2);
        assert_eq!(o.placements_for_resource("RoomA").len(), 2);
        assert_eq!(o.placements_on(Weekday::Monday).len(), 2);
        assert!(o.is_complete());
    }

    #[test]
    fn test_outcome_with_failure() {
        let mut o = sample_outcome();
        o.add_failure(FailureNotice::unschedulable("Offsite", 4));
        assert!(!o.is_complete());
        assert_eq!(o.failures.len(), 1);
    }

    #[test]
    fn test_failure_display() {
        let n = FailureNotice::unschedulable("Offsite", 4);
        assert_eq!(
            n.to_string(),
            "Unable to schedule 'Offsite' (4h): not enough consecutive slots available for all resources"
        );
    }

    #[test]
    fn test_outcome_json_round_trip() {
        let o = sample_outcome();
        let json = serde_json::to_string(&o).unwrap();
        let back: AllocationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.placements, o.placements);
        assert!(back.failures.is_empty());
    }
}
