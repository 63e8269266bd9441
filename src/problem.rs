//! Seating problem snapshot.
//!
//! [`SeatingProblem`] packages one run's immutable inputs: the student
//! table, the movable position list, the pinned bindings, and the grid
//! dimensions. The caller either supplies the parts directly
//! ([`SeatingProblem::new`]) or lets [`SeatingProblem::from_grid`]
//! partition an editor snapshot. Students are addressed by index into
//! the table from here on; only [`Layout`] values change during the
//! search.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SolveError;
use crate::model::{Layout, SeatGrid, SeatPos, Student};

/// Immutable inputs of one optimization run.
///
/// # Example
///
/// ```
/// use u_seating::model::{SeatGrid, Student};
/// use u_seating::problem::SeatingProblem;
///
/// let roster = vec![
///     Student::new("Alice").with_avoid("Bob"),
///     Student::new("Bob"),
///     Student::new("Carol"),
/// ];
/// let mut grid = SeatGrid::new(2, 3);
/// grid.pin(0, 0, "Bob");
/// grid.disable(1, 2);
///
/// let problem = SeatingProblem::from_grid(&roster, &grid).unwrap();
/// assert_eq!(problem.movable_count, 2);
/// assert_eq!(problem.positions.len(), 4);
/// assert_eq!(problem.fixed.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SeatingProblem {
    /// All students participating in the run. Movable students occupy
    /// indices `0..movable_count`; pinned students follow.
    pub students: Vec<Student>,
    /// Number of movable students (a prefix of `students`).
    pub movable_count: usize,
    /// Movable positions. Layout slot `i` refers to entry `i`.
    pub positions: Vec<SeatPos>,
    /// Pinned bindings: student index → seat, excluded from swapping
    /// but included in cost evaluation.
    pub fixed: Vec<(usize, SeatPos)>,
    /// Grid row count (drives the row-bias cost terms).
    pub rows: usize,
    /// Grid column count.
    pub cols: usize,
}

impl SeatingProblem {
    /// Builds a snapshot from already-partitioned parts.
    ///
    /// Pinned occupants carry full [`Student`] values because they
    /// participate in cost evaluation like everyone else. Positions
    /// and names are assumed distinct (caller invariant); see
    /// [`crate::validation::validate_problem`] for an opt-in check.
    pub fn new(
        movable_students: Vec<Student>,
        movable_positions: Vec<SeatPos>,
        fixed_assignments: Vec<(Student, SeatPos)>,
        rows: usize,
        cols: usize,
    ) -> Self {
        let movable_count = movable_students.len();
        let mut students = movable_students;
        let mut fixed = Vec::with_capacity(fixed_assignments.len());
        for (student, pos) in fixed_assignments {
            students.push(student);
            fixed.push((students.len() - 1, pos));
        }
        Self {
            students,
            movable_count,
            positions: movable_positions,
            fixed,
            rows,
            cols,
        }
    }

    /// Builds a snapshot from a roster and a grid snapshot.
    ///
    /// The grid is partitioned per [`SeatGrid::partition`]; pinned
    /// occupant names are resolved against the roster and the
    /// remaining roster members become the movable students, in
    /// roster order.
    pub fn from_grid(roster: &[Student], grid: &SeatGrid) -> Result<Self, SolveError> {
        let partition = grid.partition();

        let mut pinned_names: HashSet<&str> = HashSet::new();
        let mut fixed_assignments = Vec::with_capacity(partition.fixed.len());
        for (name, pos) in &partition.fixed {
            if !pinned_names.insert(name.as_str()) {
                return Err(SolveError::DuplicatePin { name: name.clone() });
            }
            let student = roster
                .iter()
                .find(|s| s.name == *name)
                .cloned()
                .ok_or_else(|| SolveError::UnknownStudent { name: name.clone() })?;
            fixed_assignments.push((student, *pos));
        }

        let movable_students: Vec<Student> = roster
            .iter()
            .filter(|s| !pinned_names.contains(s.name.as_str()))
            .cloned()
            .collect();

        Ok(Self::new(
            movable_students,
            partition.movable,
            fixed_assignments,
            grid.rows,
            grid.cols,
        ))
    }

    /// The movable students (prefix of the student table).
    pub fn movable_students(&self) -> &[Student] {
        &self.students[..self.movable_count]
    }

    /// Index of the named student in the table, if present.
    pub fn student_index(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| s.name == name)
    }

    /// Builds the random starting layout: a uniform permutation of the
    /// movable students zipped onto the first `movable_count` entries
    /// of the position list. Surplus positions stay empty, which is a
    /// valid state — fewer occupants than seats.
    pub fn initial_layout<R: Rng>(&self, rng: &mut R) -> Layout {
        let mut order: Vec<usize> = (0..self.movable_count).collect();
        order.shuffle(rng);

        let mut layout = Layout::empty(self.positions.len());
        for (slot, student) in order.into_iter().enumerate() {
            layout.set(slot, Some(student));
        }
        layout
    }

    /// Resolves a layout into the full `(seat, student)` assignment,
    /// pinned students included — the form collaborators consume.
    pub fn placements<'a>(&'a self, layout: &Layout) -> Vec<(SeatPos, &'a Student)> {
        let mut result = Vec::with_capacity(self.fixed.len() + layout.occupied_count());
        for &(student, pos) in &self.fixed {
            result.push((pos, &self.students[student]));
        }
        for (slot, student) in layout.occupied() {
            result.push((self.positions[slot], &self.students[student]));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_positions(n: usize) -> Vec<SeatPos> {
        (0..n).map(|col| SeatPos::new(0, col)).collect()
    }

    #[test]
    fn test_new_orders_students_movable_first() {
        let problem = SeatingProblem::new(
            vec![Student::new("A"), Student::new("B")],
            sample_positions(3),
            vec![(Student::new("Pinned"), SeatPos::new(1, 0))],
            2,
            3,
        );

        assert_eq!(problem.movable_count, 2);
        assert_eq!(problem.students.len(), 3);
        assert_eq!(problem.students[2].name, "Pinned");
        assert_eq!(problem.fixed, vec![(2, SeatPos::new(1, 0))]);
        assert_eq!(
            problem
                .movable_students()
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_from_grid_partitions_roster() {
        let roster = vec![
            Student::new("Alice"),
            Student::new("Bob"),
            Student::new("Carol"),
        ];
        let mut grid = SeatGrid::new(2, 2);
        grid.pin(0, 1, "Bob");
        grid.disable(1, 1);

        let problem = SeatingProblem::from_grid(&roster, &grid).unwrap();
        assert_eq!(problem.movable_count, 2);
        assert_eq!(problem.positions.len(), 2);
        assert_eq!(problem.fixed.len(), 1);
        let (bob, pos) = problem.fixed[0];
        assert_eq!(problem.students[bob].name, "Bob");
        assert_eq!(pos, SeatPos::new(0, 1));
    }

    #[test]
    fn test_from_grid_unknown_pin() {
        let roster = vec![Student::new("Alice")];
        let mut grid = SeatGrid::new(1, 2);
        grid.pin(0, 0, "Ghost");

        let err = SeatingProblem::from_grid(&roster, &grid).unwrap_err();
        assert_eq!(
            err,
            SolveError::UnknownStudent {
                name: "Ghost".into()
            }
        );
    }

    #[test]
    fn test_from_grid_duplicate_pin() {
        let roster = vec![Student::new("Alice")];
        let mut grid = SeatGrid::new(1, 3);
        grid.pin(0, 0, "Alice");
        grid.pin(0, 2, "Alice");

        let err = SeatingProblem::from_grid(&roster, &grid).unwrap_err();
        assert_eq!(
            err,
            SolveError::DuplicatePin {
                name: "Alice".into()
            }
        );
    }

    #[test]
    fn test_initial_layout_is_a_permutation_prefix() {
        let students: Vec<Student> = (0..4).map(|i| Student::new(format!("S{i}"))).collect();
        let problem = SeatingProblem::new(students, sample_positions(6), vec![], 1, 6);

        let mut rng = SmallRng::seed_from_u64(7);
        let layout = problem.initial_layout(&mut rng);

        assert_eq!(layout.len(), 6);
        assert_eq!(layout.occupied_count(), 4);
        // First four slots hold each student exactly once.
        let mut seen: Vec<usize> = (0..4).filter_map(|slot| layout.student_at(slot)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        // Surplus slots stay empty.
        assert_eq!(layout.student_at(4), None);
        assert_eq!(layout.student_at(5), None);
    }

    #[test]
    fn test_placements_cover_fixed_and_movable() {
        let problem = SeatingProblem::new(
            vec![Student::new("A")],
            sample_positions(2),
            vec![(Student::new("P"), SeatPos::new(1, 1))],
            2,
            2,
        );
        let mut rng = SmallRng::seed_from_u64(1);
        let layout = problem.initial_layout(&mut rng);

        let placements = problem.placements(&layout);
        assert_eq!(placements.len(), 2);
        let names: Vec<&str> = placements.iter().map(|(_, s)| s.name.as_str()).collect();
        assert!(names.contains(&"A"));
        assert!(names.contains(&"P"));
    }
}
