//! Seating assignment optimization engine.
//!
//! Assigns named students to the cells of a seat grid so that a
//! preference-weighted cost is minimal, subject to pinned and disabled
//! seats. The search is simulated annealing over occupant swaps; the
//! cost model combines row-bias, avoidance, affinity, and
//! preferred-area terms.
//!
//! # Modules
//!
//! - **`model`**: Domain types — `Student`, `Seat`, `SeatGrid`, `Layout`.
//! - **`area`**: The preferred-area mini-language (`"2,3"`, `"1,1-3,4"`).
//! - **`cost`**: The pure layout evaluator and its weight constants.
//! - **`problem`**: The immutable per-run snapshot the solver consumes.
//! - **`solver`**: Annealing configuration, the synchronous runner, and
//!   the background handle with progress stream and cancellation.
//! - **`validation`**: Opt-in integrity checks for assembled problems.
//! - **`error`**: The entry-rejection error type.
//!
//! # Architecture
//!
//! This crate is the optimization core only. Grid editing, persistence,
//! and presentation are external collaborators: they supply the roster
//! and the seat grid snapshot, and consume the returned layout and the
//! progress stream. The engine holds no state across runs.

pub mod area;
pub mod cost;
pub mod error;
pub mod model;
pub mod problem;
pub mod solver;
pub mod validation;
