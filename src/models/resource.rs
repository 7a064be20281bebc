//! Resource model.
//!
//! Resources are the entities an activity books: rooms, employees,
//! equipment. Each resource is a single unit (no quantities or pools)
//! identified by a unique name, with an explicit list of availability
//! windows.

use serde::{Deserialize, Serialize};

use super::{TimeWindow, Weekday};

/// A bookable resource.
///
/// Name uniqueness is the configuration collaborator's responsibility
/// (see [`crate::validation::validate_input`]); the allocator reads
/// resources but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name.
    pub name: String,
    /// Resource classification.
    pub kind: ResourceKind,
    /// Windows in which this resource may be booked.
    pub availability: Vec<TimeWindow>,
}

/// Resource classification.
///
/// Purely descriptive: the allocator treats all kinds identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// A physical space (e.g., meeting room).
    Room,
    /// A person.
    Employee,
    /// A shared device (e.g., projector, vehicle).
    Equipment,
    /// Domain-specific label.
    Custom(String),
}

impl Resource {
    /// Creates a resource with no availability windows.
    pub fn new(name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            availability: Vec::new(),
        }
    }

    /// Creates a room resource.
    pub fn room(name: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::Room)
    }

    /// Creates an employee resource.
    pub fn employee(name: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::Employee)
    }

    /// Creates an equipment resource.
    pub fn equipment(name: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::Equipment)
    }

    /// Adds an availability window.
    pub fn with_window(mut self, day: Weekday, start_hour: u8, end_hour: u8) -> Self {
        self.availability
            .push(TimeWindow::new(day, start_hour, end_hour));
        self
    }

    /// Replaces the availability list.
    pub fn with_availability(mut self, availability: Vec<TimeWindow>) -> Self {
        self.availability = availability;
        self
    }

    /// Whether the full hour `[hour, hour + 1)` on `day` lies inside at
    /// least one availability window.
    ///
    /// A resource with no windows is never available.
    pub fn is_available(&self, day: Weekday, hour: u8) -> bool {
        self.availability.iter().any(|w| w.covers(day, hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::room("RoomA")
            .with_window(Weekday::Monday, 9, 12)
            .with_window(Weekday::Tuesday, 14, 16);

        assert_eq!(r.name, "RoomA");
        assert_eq!(r.kind, ResourceKind::Room);
        assert_eq!(r.availability.len(), 2);
    }

    #[test]
    fn test_kind_constructors() {
        assert_eq!(Resource::room("R").kind, ResourceKind::Room);
        assert_eq!(Resource::employee("E").kind, ResourceKind::Employee);
        assert_eq!(Resource::equipment("P").kind, ResourceKind::Equipment);

        let custom = Resource::new("Van", ResourceKind::Custom("Vehicle".into()));
        assert_eq!(custom.kind, ResourceKind::Custom("Vehicle".into()));
    }

    #[test]
    fn test_availability_predicate() {
        let r = Resource::room("RoomA").with_window(Weekday::Monday, 9, 12);

        assert!(r.is_available(Weekday::Monday, 9));
        assert!(r.is_available(Weekday::Monday, 11));
        assert!(!r.is_available(Weekday::Monday, 12));
        assert!(!r.is_available(Weekday::Tuesday, 9));
    }

    #[test]
    fn test_with_availability_replaces() {
        let r = Resource::room("RoomA")
            .with_window(Weekday::Monday, 9, 12)
            .with_availability(vec![TimeWindow::new(Weekday::Friday, 13, 15)]);

        assert!(!r.is_available(Weekday::Monday, 9));
        assert!(r.is_available(Weekday::Friday, 13));
    }

    #[test]
    fn test_no_windows_never_available() {
        let r = Resource::employee("Alice");
        assert!(!r.is_available(Weekday::Monday, 9));
    }

    #[test]
    fn test_multiple_windows_any_match() {
        let r = Resource::equipment("Projector")
            .with_window(Weekday::Monday, 8, 10)
            .with_window(Weekday::Monday, 13, 15);

        assert!(r.is_available(Weekday::Monday, 8));
        assert!(!r.is_available(Weekday::Monday, 11)); // gap between windows
        assert!(r.is_available(Weekday::Monday, 14));
    }
}
