//! Greedy grid allocator.
//!
//! # Algorithm
//!
//! 1. Expand configured windows into the atomic 1-hour cell sequence.
//! 2. For each activity, in registration order:
//!    a. enumerate candidate runs of the requested duration,
//!    b. keep the feasible ones (joint availability, no claimed cell),
//!    c. commit one per the active placement preference, or record a
//!       failure and move on.
//!
//! Commits are irrevocable: no backtracking reconsiders an earlier
//! activity's placement to accommodate a later one.
//!
//! # Complexity
//! O(cells × activities × resources-per-activity) — small for realistic
//! weekly inputs (hundreds of cells, tens of activities).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::feasibility::{is_feasible, UsedCells};
use super::grid::{candidate_runs, expand_windows};
use crate::models::{
    Activity, AllocationOutcome, Cell, FailureNotice, Placement, Resource, TimeWindow,
};

/// Global tie-break policy selecting which feasible candidate to commit.
///
/// One preference applies to the whole generation run. `NoPreference`
/// behaves identically to `EarliestFirst`; the distinction is kept so
/// collaborators can record "the user chose nothing" faithfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPreference {
    /// Commit the first feasible candidate in sequence order.
    EarliestFirst,
    /// Commit the last feasible candidate in sequence order.
    LatestFirst,
    /// No stated preference; first-fit, same as `EarliestFirst`.
    #[default]
    NoPreference,
}

/// Input container for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Configured grid windows, in registration order.
    pub timeslots: Vec<TimeWindow>,
    /// Configured resources.
    pub resources: Vec<Resource>,
    /// Requested activities, in registration order.
    pub activities: Vec<Activity>,
    /// Configured preferences. Only the first takes effect; later
    /// entries are ignored.
    pub preferences: Vec<PlacementPreference>,
}

impl AllocationRequest {
    /// Creates a request with no placement preference.
    pub fn new(
        timeslots: Vec<TimeWindow>,
        resources: Vec<Resource>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            timeslots,
            resources,
            activities,
            preferences: Vec::new(),
        }
    }

    /// Appends a placement preference.
    ///
    /// Only the first configured preference is honored per run.
    pub fn with_preference(mut self, preference: PlacementPreference) -> Self {
        self.preferences.push(preference);
        self
    }
}

/// Greedy weekly-grid allocator.
///
/// Places activities one by one onto the expanded hourly grid, booking
/// every required resource for the same contiguous block. Activities
/// are processed strictly in registration order; scarcity therefore
/// favors earlier-listed activities.
///
/// # Example
///
/// ```
/// use weekplan::allocator::{GridAllocator, PlacementPreference};
/// use weekplan::models::{Activity, Resource, TimeWindow, Weekday};
///
/// let timeslots = vec![TimeWindow::new(Weekday::Monday, 9, 12)];
/// let resources = vec![Resource::room("RoomA").with_window(Weekday::Monday, 9, 12)];
/// let activities = vec![Activity::new("Standup", 1).with_resource("RoomA")];
///
/// let allocator = GridAllocator::new().with_preference(PlacementPreference::EarliestFirst);
/// let outcome = allocator.allocate(&timeslots, &resources, &activities);
/// assert_eq!(outcome.placement_count(), 1);
/// assert_eq!(outcome.placements[0].start_hour, 9);
/// assert_eq!(outcome.placements[0].end_hour, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridAllocator {
    preferences: Vec<PlacementPreference>,
}

impl GridAllocator {
    /// Creates an allocator with no placement preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement preference.
    ///
    /// Only the first configured preference is honored per run; later
    /// entries are ignored.
    pub fn with_preference(mut self, preference: PlacementPreference) -> Self {
        self.preferences.push(preference);
        self
    }

    /// Runs one generation cycle.
    ///
    /// Reads the configuration snapshot once and returns the ordered
    /// placements and failure notices. Never fails as a whole: input
    /// that cannot be honored (zero duration, unknown resource name)
    /// degenerates into a failure notice for that activity.
    pub fn allocate(
        &self,
        timeslots: &[TimeWindow],
        resources: &[Resource],
        activities: &[Activity],
    ) -> AllocationOutcome {
        let cells = expand_windows(timeslots);
        let resources_by_name: HashMap<&str, &Resource> =
            resources.iter().map(|r| (r.name.as_str(), r)).collect();
        let preference = self.active_preference();

        let mut outcome = AllocationOutcome::new();
        let mut used = UsedCells::new();

        for activity in activities {
            let feasible: Vec<&[Cell]> = candidate_runs(&cells, activity.duration_hours as usize)
                .into_iter()
                .filter(|run| {
                    is_feasible(run, &activity.required_resources, &resources_by_name, &used)
                })
                .collect();

            let chosen = match preference {
                PlacementPreference::LatestFirst => feasible.last(),
                PlacementPreference::EarliestFirst | PlacementPreference::NoPreference => {
                    feasible.first()
                }
            };

            match chosen {
                Some(run) => {
                    let day = run[0].day;
                    let start_hour = run[0].start_hour();
                    let end_hour = run[run.len() - 1].end_hour();

                    for resource_name in &activity.required_resources {
                        outcome.add_placement(Placement::new(
                            &activity.name,
                            day,
                            start_hour,
                            end_hour,
                            resource_name,
                        ));
                    }
                    for cell in run.iter() {
                        used.claim(*cell);
                    }
                }
                None => outcome.add_failure(FailureNotice::unschedulable(
                    &activity.name,
                    activity.duration_hours,
                )),
            }
        }

        outcome
    }

    /// Runs one generation cycle from a request.
    ///
    /// The request's configured preferences take effect in place of the
    /// allocator's own.
    pub fn allocate_request(&self, request: &AllocationRequest) -> AllocationOutcome {
        let allocator = Self {
            preferences: request.preferences.clone(),
        };
        allocator.allocate(&request.timeslots, &request.resources, &request.activities)
    }

    /// The preference honored this run: the first configured one.
    fn active_preference(&self) -> PlacementPreference {
        self.preferences
            .first()
            .copied()
            .unwrap_or(PlacementPreference::NoPreference)
    }
}
