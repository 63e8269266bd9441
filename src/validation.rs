//! Input validation for seating problems.
//!
//! Checks the structural integrity of a problem snapshot before
//! solving. The runner itself enforces only the capacity precondition;
//! everything else here is an opt-in check for callers assembling
//! problems from editor state. Detects:
//! - Duplicate student names
//! - Duplicate seat positions (movable or pinned)
//! - Positions outside the grid
//! - More movable students than movable seats
//! - Non-finite preference weights
//! - Students avoiding or preferring themselves
//!
//! Unknown avoid/prefer names are deliberately not flagged: a listed
//! peer may simply not take part in this run, and the cost model skips
//! absent names.

use std::collections::HashSet;

use crate::model::SeatPos;
use crate::problem::SeatingProblem;

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
    /// Two students share the same name.
    DuplicateStudent,
    /// Two seats share the same position.
    DuplicatePosition,
    /// A seat lies outside the grid.
    PositionOutOfBounds,
    /// More movable students than movable seats.
    InsufficientCapacity,
    /// A weight is NaN or infinite.
    NonFiniteWeight,
    /// A student avoids or prefers themselves.
    SelfReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem snapshot.
///
/// Checks:
/// 1. No duplicate student names
/// 2. No duplicate positions across movable and pinned seats
/// 3. All positions inside the `rows x cols` grid
/// 4. Movable students fit into the movable seats
/// 5. All weights finite
/// 6. No student avoids or prefers themselves
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &SeatingProblem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for student in &problem.students {
        if !names.insert(student.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudent,
                format!("Duplicate student name: {}", student.name),
            ));
        }
    }

    let mut positions: HashSet<SeatPos> = HashSet::new();
    let movable = problem.positions.iter().copied();
    let pinned = problem.fixed.iter().map(|&(_, pos)| pos);
    for pos in movable.chain(pinned) {
        if !positions.insert(pos) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePosition,
                format!("Duplicate seat position ({}, {})", pos.row, pos.col),
            ));
        }
        if pos.row >= problem.rows || pos.col >= problem.cols {
            errors.push(ValidationError::new(
                ValidationErrorKind::PositionOutOfBounds,
                format!(
                    "Seat ({}, {}) lies outside the {}x{} grid",
                    pos.row, pos.col, problem.rows, problem.cols
                ),
            ));
        }
    }

    if problem.movable_count > problem.positions.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCapacity,
            format!(
                "{} movable students but only {} movable seats",
                problem.movable_count,
                problem.positions.len()
            ),
        ));
    }

    for student in &problem.students {
        if !student.height_weight.is_finite() || !student.importance_weight.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteWeight,
                format!("Student '{}' has a non-finite weight", student.name),
            ));
        }
        if student.avoid_names.contains(&student.name)
            || student.prefer_names.contains(&student.name)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfReference,
                format!("Student '{}' references themselves", student.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
