//! Annealing execution loop.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::AnnealConfig;
use crate::cost::CostModel;
use crate::error::SolveError;
use crate::model::Layout;
use crate::problem::SeatingProblem;

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// The best layout found.
    pub best_layout: Layout,

    /// Cost of the best layout.
    pub best_cost: f64,

    /// Total number of iterations (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled on the progress cadence, initial value first.
    pub cost_history: Vec<f64>,
}

/// Executes the annealing search.
///
/// The search is single-threaded and runs its full iteration budget;
/// there is no convergence-based early exit. Run it through
/// [`crate::solver::optimize`] to keep an interactive caller
/// responsive.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search to completion.
    pub fn run(
        problem: &SeatingProblem,
        config: &AnnealConfig,
    ) -> Result<AnnealOutcome, SolveError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked at the top of every iteration. On
    /// cancellation the best layout found so far is still returned,
    /// with [`AnnealOutcome::cancelled`] set.
    pub fn run_with_cancel(
        problem: &SeatingProblem,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealOutcome, SolveError> {
        Self::run_with_observer(problem, config, cancel, |_| {})
    }

    /// Runs the search, reporting progress as a percentage in
    /// `[0, 100]`.
    ///
    /// `on_progress` fires roughly once per percent of the iteration
    /// budget, with duplicate values suppressed; an uncancelled run
    /// always ends with `100`.
    ///
    /// # Errors
    ///
    /// Fails before any search work when the configuration is invalid
    /// ([`SolveError::InvalidConfig`]) or when more movable students
    /// than movable positions were supplied
    /// ([`SolveError::CapacityExceeded`]).
    pub fn run_with_observer(
        problem: &SeatingProblem,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_progress: impl FnMut(u8),
    ) -> Result<AnnealOutcome, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;

        let slots = problem.positions.len();
        if problem.movable_count > slots {
            return Err(SolveError::CapacityExceeded {
                count: problem.movable_count,
                capacity: slots,
            });
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let model = CostModel::new(problem);

        // Initialize
        let mut current = problem.initial_layout(&mut rng);
        let mut current_cost = model.evaluate(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        // Without movable positions there is no swap to try; the
        // initial (empty) layout and the fixed-only cost are final.
        let budget = if slots == 0 {
            0
        } else {
            config.iteration_budget(problem.movable_count)
        };

        // Progress and cost history share one cadence: every ~1% of
        // the budget.
        let report_interval = (budget / 100).max(1);
        let mut cost_history = Vec::new();
        cost_history.push(best_cost);
        let mut last_percent = None;

        for _ in 0..budget {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // The two draws are independent and may coincide; the
            // resulting no-op candidate is re-accepted at delta 0 and
            // the iteration is simply spent.
            let a = rng.random_range(0..slots);
            let b = rng.random_range(0..slots);
            let mut candidate = current.clone();
            candidate.swap(a, b);

            let candidate_cost = model.evaluate(&candidate);
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temperature *= config.cooling_rate;
            total_iterations += 1;

            if total_iterations.is_multiple_of(report_interval) {
                cost_history.push(best_cost);
                let percent = (total_iterations * 100 / budget) as u8;
                if last_percent != Some(percent) {
                    on_progress(percent);
                    last_percent = Some(percent);
                }
            }
        }

        // Completion signal, even for budgets the cadence never
        // divides evenly into.
        if !cancelled && last_percent != Some(100) {
            on_progress(100);
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        Ok(AnnealOutcome {
            best_layout: best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
