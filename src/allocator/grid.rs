//! Weekly grid expansion and candidate search.
//!
//! Turns configured coarse windows into the atomic 1-hour cell sequence
//! and enumerates the contiguous single-day runs an activity could
//! occupy.
//!
//! # Ordering
//! Both functions preserve configuration order: cells follow the order
//! windows were registered, and candidates follow ascending position in
//! the cell sequence. This is not calendar order across days.

use crate::models::{Cell, TimeWindow};

/// Expands coarse windows into consecutive 1-hour cells.
///
/// A window `Monday 9-12` yields the cells 9, 10, and 11. Overlapping
/// windows are NOT deduplicated: their cells appear once per window and
/// may be matched redundantly by [`candidate_runs`].
pub fn expand_windows(windows: &[TimeWindow]) -> Vec<Cell> {
    windows
        .iter()
        .flat_map(|w| (w.start_hour..w.end_hour).map(|hour| Cell::new(w.day, hour)))
        .collect()
}

/// Enumerates every contiguous run of `duration_hours` cells that stays
/// on a single day.
///
/// Runs may span adjacent configured windows, but never a day boundary,
/// even when cells of different days are contiguous in the sequence.
/// Candidates are returned in ascending sequence position. A zero
/// duration yields no candidates.
pub fn candidate_runs(cells: &[Cell], duration_hours: usize) -> Vec<&[Cell]> {
    if duration_hours == 0 {
        return Vec::new();
    }
    cells
        .windows(duration_hours)
        .filter(|run| run.iter().all(|c| c.day == run[0].day))
        .collect()
}
