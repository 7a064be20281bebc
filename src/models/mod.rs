//! Timetabling domain models.
//!
//! Provides the record types exchanged with collaborators: the weekly
//! time axis ([`Weekday`], [`TimeWindow`], [`Cell`]), configured inputs
//! ([`Resource`], [`Activity`]), and run outputs ([`Placement`],
//! [`FailureNotice`], [`AllocationOutcome`]).
//!
//! All models are plain data with serde round-tripping; the allocation
//! logic lives in [`crate::allocator`].

mod activity;
mod outcome;
mod resource;
mod time;

pub use activity::Activity;
pub use outcome::{AllocationOutcome, FailureNotice, Placement};
pub use resource::{Resource, ResourceKind};
pub use time::{Cell, TimeWindow, Weekday};
