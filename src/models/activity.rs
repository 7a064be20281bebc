//! Activity model.
//!
//! An activity is a requested meeting or task: a name, a whole-hour
//! duration, and the set of resource names that must all be free for
//! the same contiguous block.

use serde::{Deserialize, Serialize};

/// A requested activity.
///
/// `duration_hours` is expected to be at least 1 and every entry of
/// `required_resources` must name a known [`crate::models::Resource`];
/// input that breaks either rule degenerates into an unschedulable
/// activity rather than an error (the configuration collaborator
/// rejects it earlier via [`crate::validation::validate_input`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name, used in placements and failure notices.
    pub name: String,
    /// Requested length in whole hours.
    pub duration_hours: u32,
    /// Names of the resources that must be jointly free.
    pub required_resources: Vec<String>,
}

impl Activity {
    /// Creates an activity with no required resources.
    pub fn new(name: impl Into<String>, duration_hours: u32) -> Self {
        Self {
            name: name.into(),
            duration_hours,
            required_resources: Vec::new(),
        }
    }

    /// Adds a required resource name.
    pub fn with_resource(mut self, name: impl Into<String>) -> Self {
        self.required_resources.push(name.into());
        self
    }

    /// Replaces the required-resource list.
    pub fn with_resources(mut self, names: Vec<String>) -> Self {
        self.required_resources = names;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let a = Activity::new("Standup", 1)
            .with_resource("RoomA")
            .with_resource("Alice");

        assert_eq!(a.name, "Standup");
        assert_eq!(a.duration_hours, 1);
        assert_eq!(a.required_resources, vec!["RoomA", "Alice"]);
    }

    #[test]
    fn test_with_resources_replaces() {
        let a = Activity::new("Review", 2)
            .with_resource("RoomA")
            .with_resources(vec!["RoomB".into()]);

        assert_eq!(a.required_resources, vec!["RoomB"]);
    }
}
