//! Candidate feasibility checking.
//!
//! A candidate run is feasible for an activity when every required
//! resource resolves, every resource is available in every cell of the
//! run, and no cell has already been claimed by an earlier commitment
//! in the same generation run.
//!
//! Resolution failures are silent here: an unknown resource name makes
//! every candidate infeasible, and the activity surfaces downstream as
//! a plain unschedulable failure.

use std::collections::{HashMap, HashSet};

use crate::models::{Cell, Resource};

/// Cells already claimed by committed placements within one run.
///
/// Scoped to a single generation run; never reused across runs. Only
/// the commit step mutates it.
#[derive(Debug, Clone, Default)]
pub struct UsedCells {
    claimed: HashSet<Cell>,
}

impl UsedCells {
    /// Creates an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cell as claimed.
    pub fn claim(&mut self, cell: Cell) {
        self.claimed.insert(cell);
    }

    /// Whether a cell is already claimed.
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.claimed.contains(&cell)
    }

    /// Number of distinct claimed cells.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Whether no cell has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Whether a candidate run can host an activity.
///
/// `resources_by_name` is the lookup table the driver builds once per
/// generation run. Pure: no side effects on the claim set.
pub fn is_feasible(
    run: &[Cell],
    required_resources: &[String],
    resources_by_name: &HashMap<&str, &Resource>,
    used: &UsedCells,
) -> bool {
    for cell in run {
        if used.is_claimed(*cell) {
            return false;
        }
        for name in required_resources {
            match resources_by_name.get(name.as_str()) {
                Some(resource) if resource.is_available(cell.day, cell.hour) => {}
                _ => return false,
            }
        }
    }
    true
}
