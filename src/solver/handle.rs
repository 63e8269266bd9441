//! Background execution handle.
//!
//! The search itself is CPU-bound and single-threaded; [`optimize`]
//! moves it onto one worker thread so an interactive caller stays
//! responsive, and wires up a one-directional progress channel. The
//! handle owns the problem snapshot for the duration of the run, so
//! nothing the caller holds can be mutated mid-search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use super::config::AnnealConfig;
use super::runner::{AnnealOutcome, AnnealRunner};
use crate::error::SolveError;
use crate::problem::SeatingProblem;

/// Handle to an annealing run on a background thread.
///
/// Created by [`optimize`]. Progress percentages arrive on the channel
/// behind [`OptimizeHandle::progress`]; [`OptimizeHandle::join`]
/// delivers exactly one final result.
pub struct OptimizeHandle {
    worker: thread::JoinHandle<Result<AnnealOutcome, SolveError>>,
    progress: mpsc::Receiver<u8>,
    cancel: Arc<AtomicBool>,
}

impl OptimizeHandle {
    /// The progress stream: percentages in `[0, 100]`, non-decreasing,
    /// ending with `100` unless the run is cancelled. The channel
    /// closes when the run finishes.
    pub fn progress(&self) -> &mpsc::Receiver<u8> {
        &self.progress
    }

    /// Requests cooperative cancellation.
    ///
    /// The run stops at the next iteration boundary and still returns
    /// the best layout found so far.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Whether the background run has finished.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the run and returns its result.
    ///
    /// Entry rejections ([`SolveError::InvalidConfig`],
    /// [`SolveError::CapacityExceeded`]) surface here. A panic on the
    /// worker thread is resumed on the calling thread.
    pub fn join(self) -> Result<AnnealOutcome, SolveError> {
        match self.worker.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Starts an annealing run on a background thread.
///
/// # Examples
///
/// ```
/// use u_seating::model::{SeatPos, Student};
/// use u_seating::problem::SeatingProblem;
/// use u_seating::solver::{optimize, AnnealConfig};
///
/// let students = vec![Student::new("Alice").with_avoid("Bob"), Student::new("Bob")];
/// let positions = (0..4).map(|col| SeatPos::new(0, col)).collect();
/// let problem = SeatingProblem::new(students, positions, vec![], 1, 4);
///
/// let handle = optimize(problem, AnnealConfig::default().with_seed(42));
/// for percent in handle.progress().iter() {
///     assert!(percent <= 100);
/// }
/// let outcome = handle.join().unwrap();
/// assert_eq!(outcome.best_cost, 0.0);
/// ```
pub fn optimize(problem: SeatingProblem, config: AnnealConfig) -> OptimizeHandle {
    let (sender, receiver) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let worker = thread::spawn(move || {
        AnnealRunner::run_with_observer(&problem, &config, Some(flag), |percent| {
            // A closed channel only means nobody is watching progress.
            let _ = sender.send(percent);
        })
    });

    OptimizeHandle {
        worker,
        progress: receiver,
        cancel,
    }
}
