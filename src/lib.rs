//! Weekly timetable allocation.
//!
//! Places requested activities onto a fixed weekly grid of hourly
//! cells, booking every required resource for one contiguous block and
//! never double-booking a resource. The allocation is greedy and fully
//! deterministic: activities are processed in registration order, each
//! commit is final, and a single global placement preference breaks
//! ties between feasible candidates.
//!
//! Form entry, rendering, and export live in collaborating layers; this
//! crate only consumes configured records and produces placement and
//! failure records.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeWindow`, `Cell`,
//!   `Resource`, `Activity`, `Placement`, `FailureNotice`,
//!   `AllocationOutcome`
//! - **`allocator`**: The core — grid expansion, candidate search,
//!   feasibility filtering, and the greedy `GridAllocator` driver
//! - **`validation`**: Input integrity checks for the configuration
//!   layer (duplicate names, unknown references, malformed windows)
//!
//! # Example
//!
//! ```
//! use weekplan::allocator::{GridAllocator, PlacementPreference};
//! use weekplan::models::{Activity, Resource, TimeWindow, Weekday};
//!
//! let timeslots = vec![TimeWindow::new(Weekday::Monday, 9, 12)];
//! let resources = vec![
//!     Resource::room("RoomA").with_window(Weekday::Monday, 9, 12),
//!     Resource::employee("Alice").with_window(Weekday::Monday, 9, 11),
//! ];
//! let activities = vec![
//!     Activity::new("Standup", 1).with_resource("RoomA").with_resource("Alice"),
//! ];
//!
//! let allocator = GridAllocator::new().with_preference(PlacementPreference::EarliestFirst);
//! let outcome = allocator.allocate(&timeslots, &resources, &activities);
//!
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.placements.len(), 2); // one record per booked resource
//! ```

pub mod allocator;
pub mod models;
pub mod validation;
