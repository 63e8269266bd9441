//! Preference-weighted layout cost.
//!
//! [`CostModel`] scores a complete [`Layout`] as a single non-negative
//! `f64`. Lower is better; `0.0` means every modeled preference is
//! satisfied. The score is a sum of independent per-student terms:
//!
//! * row bias: a positive `height_weight` pushes toward the back rows
//!   and a negative one toward the front, while a positive
//!   `importance_weight` pulls toward the front row (row 0),
//! * avoidance: flat penalties when an avoided partner sits within
//!   Manhattan distance 1, or exactly 2,
//! * affinity: a penalty growing quadratically with the distance to a
//!   preferred partner,
//! * area: a flat penalty for sitting outside the preferred area.
//!
//! Avoid/prefer name sets and area strings are resolved once in
//! [`CostModel::new`]; after that [`CostModel::evaluate`] is a pure
//! function of the layout, which is what the annealing loop relies on
//! when it compares candidate swaps.

use std::collections::{BTreeSet, HashMap};

use crate::area::{self, AreaBounds};
use crate::model::{Layout, SeatPos};
use crate::problem::SeatingProblem;

/// Scale of the height-driven row bias term.
pub const HEIGHT_BIAS_SCALE: f64 = 50.0;
/// Scale of the importance-driven front-row pull.
pub const IMPORTANCE_BIAS_SCALE: f64 = 60.0;
/// Penalty per avoided partner in the same or an adjacent seat
/// (Manhattan distance <= 1).
pub const ADJACENT_AVOID_PENALTY: f64 = 500.0;
/// Penalty per avoided partner exactly two steps away.
pub const CLOSE_AVOID_PENALTY: f64 = 100.0;
/// Per-squared-distance scale toward each preferred partner.
pub const PREFER_DISTANCE_SCALE: f64 = 10.0;
/// Flat penalty for sitting outside the preferred area.
pub const OUTSIDE_AREA_PENALTY: f64 = 150.0;

/// Evaluates layouts against one problem's preference data.
///
/// # Example
///
/// ```
/// use u_seating::cost::CostModel;
/// use u_seating::model::{Layout, SeatPos, Student};
/// use u_seating::problem::SeatingProblem;
///
/// let students = vec![
///     Student::new("Alice").with_prefer("Bob"),
///     Student::new("Bob"),
/// ];
/// let positions = vec![SeatPos::new(0, 0), SeatPos::new(0, 1), SeatPos::new(0, 3)];
/// let problem = SeatingProblem::new(students, positions, vec![], 1, 4);
/// let model = CostModel::new(&problem);
///
/// let mut layout = Layout::empty(3);
/// layout.set(0, Some(0)); // Alice at column 0
/// layout.set(1, Some(1)); // Bob in the adjacent seat
/// assert_eq!(model.evaluate(&layout), 10.0);
/// ```
#[derive(Debug)]
pub struct CostModel<'p> {
    problem: &'p SeatingProblem,
    /// Per-student avoided partners, as indices into the student table.
    avoid: Vec<Vec<usize>>,
    /// Per-student preferred partners, as indices into the student table.
    prefer: Vec<Vec<usize>>,
    /// Per-student parsed area bounds. `None` when no area was given or
    /// the string did not parse; either way the term is skipped.
    areas: Vec<Option<AreaBounds>>,
}

impl<'p> CostModel<'p> {
    /// Resolves the problem's name sets and area strings into index
    /// lists and bounds. Names that match no student are dropped here
    /// and never cost anything.
    pub fn new(problem: &'p SeatingProblem) -> Self {
        let index_of: HashMap<&str, usize> = problem
            .students
            .iter()
            .enumerate()
            .map(|(index, student)| (student.name.as_str(), index))
            .collect();

        let resolve = |names: &BTreeSet<String>| -> Vec<usize> {
            names
                .iter()
                .filter_map(|name| index_of.get(name.as_str()).copied())
                .collect()
        };

        let avoid = problem
            .students
            .iter()
            .map(|s| resolve(&s.avoid_names))
            .collect();
        let prefer = problem
            .students
            .iter()
            .map(|s| resolve(&s.prefer_names))
            .collect();
        let areas = problem
            .students
            .iter()
            .map(|s| s.preferred_area.as_deref().and_then(area::parse))
            .collect();

        Self {
            problem,
            avoid,
            prefer,
            areas,
        }
    }

    /// Scores the layout from scratch. Students without a seat (surplus
    /// slots, or an empty layout) contribute nothing.
    pub fn evaluate(&self, layout: &Layout) -> f64 {
        let mut seat_of: Vec<Option<SeatPos>> = vec![None; self.problem.students.len()];
        for &(student, pos) in &self.problem.fixed {
            seat_of[student] = Some(pos);
        }
        for (slot, student) in layout.occupied() {
            seat_of[student] = Some(self.problem.positions[slot]);
        }

        let mut total = 0.0;
        for (index, seat) in seat_of.iter().enumerate() {
            if let Some(pos) = *seat {
                total += self.student_cost(index, pos, &seat_of);
            }
        }
        total
    }

    fn student_cost(&self, index: usize, pos: SeatPos, seat_of: &[Option<SeatPos>]) -> f64 {
        let student = &self.problem.students[index];
        let mut cost = 0.0;

        let (row_factor, reverse_row_factor) = self.row_factors(pos.row);

        let hw = student.height_weight;
        if hw > 0.0 {
            cost += hw * reverse_row_factor * HEIGHT_BIAS_SCALE;
        } else if hw < 0.0 {
            cost += -hw * row_factor * HEIGHT_BIAS_SCALE;
        }

        let iw = student.importance_weight;
        if iw > 0.0 {
            cost += iw * row_factor * IMPORTANCE_BIAS_SCALE;
        }

        for &other in &self.avoid[index] {
            if let Some(other_pos) = seat_of[other] {
                match pos.manhattan_distance(other_pos) {
                    0 | 1 => cost += ADJACENT_AVOID_PENALTY,
                    2 => cost += CLOSE_AVOID_PENALTY,
                    _ => {}
                }
            }
        }

        for &other in &self.prefer[index] {
            if let Some(other_pos) = seat_of[other] {
                let distance = pos.manhattan_distance(other_pos) as f64;
                cost += distance * distance * PREFER_DISTANCE_SCALE;
            }
        }

        if let Some(bounds) = &self.areas[index] {
            if !bounds.contains(pos) {
                cost += OUTSIDE_AREA_PENALTY;
            }
        }

        cost
    }

    /// Normalized row position and its complement. Both are `0.0` on a
    /// single-row (or empty) grid, where row placement cannot matter.
    fn row_factors(&self, row: usize) -> (f64, f64) {
        let rows = self.problem.rows;
        if rows <= 1 {
            return (0.0, 0.0);
        }
        let denom = (rows - 1) as f64;
        (row as f64 / denom, (rows - 1 - row) as f64 / denom)
    }
}
