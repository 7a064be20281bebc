//! The allocation core.
//!
//! Everything with non-trivial logic lives here: grid expansion,
//! candidate search, feasibility checking, and the greedy driver that
//! commits one candidate per activity.
//!
//! # Algorithm
//!
//! [`GridAllocator`] is greedy and deterministic. Activities are placed
//! strictly in registration order; each commit is final, so there is no
//! global objective and no backtracking. The only tunable is the
//! [`PlacementPreference`] tie-break between feasible candidates.
//!
//! # Submodules
//!
//! - [`grid`]: window expansion and contiguous-run enumeration
//! - [`feasibility`]: joint availability and claimed-cell checks

pub mod feasibility;
pub mod grid;
mod greedy;

pub use greedy::{AllocationRequest, GridAllocator, PlacementPreference};
