//! Seating domain models.
//!
//! Core data types for one optimization run: the roster entry
//! ([`Student`]), the grid snapshot ([`SeatGrid`] of [`Seat`]s), and
//! the candidate solution ([`Layout`]). A run's immutable snapshot of
//! all three lives in [`crate::problem::SeatingProblem`].

mod layout;
mod seat;
mod student;

pub use layout::Layout;
pub use seat::{GridPartition, Seat, SeatGrid, SeatPos};
pub use student::Student;
