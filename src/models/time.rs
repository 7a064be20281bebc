//! Weekday, time window, and grid cell models.
//!
//! Defines the weekly time axis: coarse availability windows and the
//! atomic 1-hour cells they expand into.
//!
//! # Time Model
//! All times are whole clock hours (0..=24) on one of six schedulable
//! weekdays. A window `[start_hour, end_hour)` is half-open; a cell covers
//! exactly `[hour, hour + 1)`. There is no sub-hour granularity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A schedulable day of the week.
///
/// Sunday is not part of the planning grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All schedulable days in calendar order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Day name (e.g., "Monday").
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coarse availability window on one day.
///
/// Half-open interval: includes `start_hour`, excludes `end_hour`.
/// Expected to satisfy `start_hour < end_hour <= 24`; see
/// [`crate::validation::validate_input`] for the enforcement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Day this window belongs to.
    pub day: Weekday,
    /// First covered hour (inclusive).
    pub start_hour: u8,
    /// End of the window (exclusive).
    pub end_hour: u8,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(day: Weekday, start_hour: u8, end_hour: u8) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }

    /// Number of whole hours this window spans.
    #[inline]
    pub fn duration_hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether the full hour `[hour, hour + 1)` lies inside this window
    /// on the given day.
    #[inline]
    pub fn covers(&self, day: Weekday, hour: u8) -> bool {
        self.day == day && self.start_hour <= hour && hour < self.end_hour
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.day, self.start_hour, self.end_hour
        )
    }
}

/// One atomic grid cell: a single clock hour on a single day.
///
/// Cells are produced by expanding configured [`TimeWindow`]s
/// (see [`crate::allocator::grid::expand_windows`]); collaborators
/// never build them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Day this cell belongs to.
    pub day: Weekday,
    /// Covered hour: the cell spans `[hour, hour + 1)`.
    pub hour: u8,
}

impl Cell {
    /// Creates a cell covering `[hour, hour + 1)` on `day`.
    pub fn new(day: Weekday, hour: u8) -> Self {
        Self { day, hour }
    }

    /// Start of the covered interval (inclusive).
    #[inline]
    pub fn start_hour(&self) -> u8 {
        self.hour
    }

    /// End of the covered interval (exclusive).
    #[inline]
    pub fn end_hour(&self) -> u8 {
        self.hour + 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.day,
            self.start_hour(),
            self.end_hour()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_duration() {
        let w = TimeWindow::new(Weekday::Monday, 9, 12);
        assert_eq!(w.duration_hours(), 3);
    }

    #[test]
    fn test_window_covers_boundaries() {
        let w = TimeWindow::new(Weekday::Monday, 9, 12);
        assert!(w.covers(Weekday::Monday, 9));
        assert!(w.covers(Weekday::Monday, 11)); // last full hour: 11:00-12:00
        assert!(!w.covers(Weekday::Monday, 12)); // 12:00-13:00 is outside
        assert!(!w.covers(Weekday::Monday, 8));
        assert!(!w.covers(Weekday::Tuesday, 9)); // wrong day
    }

    #[test]
    fn test_cell_interval() {
        let c = Cell::new(Weekday::Friday, 14);
        assert_eq!(c.start_hour(), 14);
        assert_eq!(c.end_hour(), 15);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
        let w = TimeWindow::new(Weekday::Monday, 9, 12);
        assert_eq!(w.to_string(), "Monday 09:00-12:00");
        let c = Cell::new(Weekday::Monday, 9);
        assert_eq!(c.to_string(), "Monday 09:00-10:00");
    }

    #[test]
    fn test_weekday_order() {
        assert_eq!(Weekday::ALL.len(), 6);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[5], Weekday::Saturday);
    }

    #[test]
    fn test_weekday_serde_round_trip() {
        let json = serde_json::to_string(&Weekday::Tuesday).unwrap();
        assert_eq!(json, "\"Tuesday\"");
        let back: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Weekday::Tuesday);
    }
}
