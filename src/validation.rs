//! Input validation for generation runs.
//!
//! The allocator itself never rejects input: malformed records simply
//! degenerate into unschedulable activities. This module is the
//! checkpoint the configuration collaborator runs *before* calling
//! [`crate::allocator::GridAllocator::allocate`]. Detects:
//! - Invalid time windows (reversed or out-of-range hours)
//! - Duplicate resource names
//! - Activities with a zero duration
//! - Activities with no required resources
//! - References to unknown resources

use std::collections::HashSet;

use crate::models::{Activity, Resource, TimeWindow};

/// Latest legal hour bound (end of day, exclusive window end).
const MAX_HOUR: u8 = 24;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A window has `start_hour >= end_hour` or an hour beyond 24.
    InvalidTimeWindow,
    /// Two resources share the same name.
    DuplicateResourceName,
    /// An activity requests zero hours.
    ZeroDuration,
    /// An activity requires no resources at all.
    EmptyResourceList,
    /// An activity references a resource that doesn't exist.
    UnknownResourceReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the configuration for a generation run.
///
/// Checks:
/// 1. Every grid window and every availability window is well-formed
/// 2. No duplicate resource names
/// 3. Every activity has a positive duration
/// 4. Every activity requires at least one resource
/// 5. Every required resource name points to a configured resource
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    timeslots: &[TimeWindow],
    resources: &[Resource],
    activities: &[Activity],
) -> ValidationResult {
    let mut errors = Vec::new();

    for w in timeslots {
        check_window(w, "Time slot", &mut errors);
    }

    let mut resource_names = HashSet::new();
    for r in resources {
        if !resource_names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateResourceName,
                format!("Duplicate resource name: {}", r.name),
            ));
        }
        for w in &r.availability {
            check_window(w, &format!("Availability of '{}'", r.name), &mut errors);
        }
    }

    for a in activities {
        if a.duration_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Activity '{}' has a zero duration", a.name),
            ));
        }
        if a.required_resources.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyResourceList,
                format!("Activity '{}' requires no resources", a.name),
            ));
        }
        for name in &a.required_resources {
            if !resource_names.contains(name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownResourceReference,
                    format!("Activity '{}' references unknown resource '{}'", a.name, name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_window(window: &TimeWindow, context: &str, errors: &mut Vec<ValidationError>) {
    if window.start_hour >= window.end_hour || window.end_hour > MAX_HOUR {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeWindow,
            format!(
                "{context}: invalid window {:02}:00-{:02}:00 on {}",
                window.start_hour, window.end_hour, window.day
            ),
        ));
    }
}
