//! Student (roster entry) model.
//!
//! A student carries the preference data the cost model evaluates:
//! row-bias weights, peers to sit away from or close to, and an
//! optional preferred rectangular area of the grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student to be seated.
///
/// Identity is the `name`, which must be unique among all students in
/// one optimization run. The engine does not deduplicate — see
/// [`crate::validation::validate_problem`] for an opt-in check.
///
/// # Ordering of name sets
///
/// `avoid_names` and `prefer_names` are `BTreeSet`s rather than hash
/// sets so that cost accumulation visits peers in a fixed order.
/// Seeded runs then reproduce bit-identical costs across processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student name.
    pub name: String,
    /// Row bias weight. Positive values penalize low row indices
    /// (the student drifts toward the high-index rows); negative
    /// values penalize high row indices (drifts toward row zero).
    /// Zero disables the term.
    pub height_weight: f64,
    /// Front-priority weight. Positive values penalize high row
    /// indices, pulling the student toward row zero. Zero and
    /// negative values are inert.
    pub importance_weight: f64,
    /// Names of students to keep at a distance.
    pub avoid_names: BTreeSet<String>,
    /// Names of students to keep close.
    pub prefer_names: BTreeSet<String>,
    /// Preferred-area expression, e.g. `"2,3"` or `"1,1-3,4"`
    /// (1-indexed `row,col` corners). Malformed expressions are
    /// silently treated as "no constraint" — see [`crate::area`].
    pub preferred_area: Option<String>,
}

impl Student {
    /// Creates a student with the given name and neutral preferences.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height_weight: 0.0,
            importance_weight: 0.0,
            avoid_names: BTreeSet::new(),
            prefer_names: BTreeSet::new(),
            preferred_area: None,
        }
    }

    /// Sets the row bias weight.
    pub fn with_height_weight(mut self, weight: f64) -> Self {
        self.height_weight = weight;
        self
    }

    /// Sets the front-priority weight.
    pub fn with_importance_weight(mut self, weight: f64) -> Self {
        self.importance_weight = weight;
        self
    }

    /// Adds a student name to keep at a distance.
    pub fn with_avoid(mut self, name: impl Into<String>) -> Self {
        self.avoid_names.insert(name.into());
        self
    }

    /// Adds a student name to keep close.
    pub fn with_prefer(mut self, name: impl Into<String>) -> Self {
        self.prefer_names.insert(name.into());
        self
    }

    /// Sets the preferred-area expression.
    pub fn with_preferred_area(mut self, area: impl Into<String>) -> Self {
        self.preferred_area = Some(area.into());
        self
    }

    /// Whether this student expresses any preference at all.
    pub fn has_preferences(&self) -> bool {
        self.height_weight != 0.0
            || self.importance_weight > 0.0
            || !self.avoid_names.is_empty()
            || !self.prefer_names.is_empty()
            || self.preferred_area.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let student = Student::new("Alice")
            .with_height_weight(1.5)
            .with_importance_weight(0.5)
            .with_avoid("Bob")
            .with_avoid("Carol")
            .with_prefer("Dave")
            .with_preferred_area("1,1-2,3");

        assert_eq!(student.name, "Alice");
        assert!((student.height_weight - 1.5).abs() < 1e-12);
        assert!((student.importance_weight - 0.5).abs() < 1e-12);
        assert_eq!(student.avoid_names.len(), 2);
        assert!(student.avoid_names.contains("Bob"));
        assert!(student.prefer_names.contains("Dave"));
        assert_eq!(student.preferred_area.as_deref(), Some("1,1-2,3"));
    }

    #[test]
    fn test_neutral_student() {
        let student = Student::new("Quiet");
        assert!(!student.has_preferences());

        let biased = Student::new("Front").with_importance_weight(1.0);
        assert!(biased.has_preferences());

        // Negative importance is inert, so it is not a preference.
        let inert = Student::new("Inert").with_importance_weight(-1.0);
        assert!(!inert.has_preferences());
    }

    #[test]
    fn test_avoid_names_are_a_set() {
        let student = Student::new("A").with_avoid("B").with_avoid("B");
        assert_eq!(student.avoid_names.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let student = Student::new("Alice")
            .with_height_weight(-0.5)
            .with_avoid("Bob")
            .with_preferred_area("2,2");

        let json = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, student);
    }
}
