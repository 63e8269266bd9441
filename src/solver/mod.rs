//! Simulated-annealing seat assignment.
//!
//! A single-solution trajectory search over occupant swaps: start from
//! a random placement, repeatedly swap the occupants of two movable
//! positions, accept by the Metropolis criterion, and cool the
//! temperature geometrically each iteration. Worsening swaps pass with
//! probability `exp(-delta / T)`, so the early search walks almost
//! freely and the late search only descends. The run is budget-bound;
//! the best layout ever seen is tracked separately and returned.
//!
//! [`AnnealRunner`] is the synchronous core; [`optimize`] runs it on a
//! background thread with a progress channel and cooperative
//! cancellation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod handle;
mod runner;

pub use config::{
    AnnealConfig, DEFAULT_COOLING_RATE, DEFAULT_INITIAL_TEMPERATURE, ITERATIONS_PER_STUDENT,
    MIN_ITERATION_BUDGET,
};
pub use handle::{optimize, OptimizeHandle};
pub use runner::{AnnealOutcome, AnnealRunner};
