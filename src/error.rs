//! Engine error type.
//!
//! Every failure here is terminal for the invocation: the caller
//! corrects the input and retries. Malformed preference data (bad
//! area expressions) is deliberately *not* an error — see
//! [`crate::area`].

use thiserror::Error;

/// Errors rejected at the optimizer entry, before any search work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// More movable students than movable seats. The search cannot
    /// place everyone, so it refuses to start.
    #[error("{count} movable students exceed {capacity} movable seats")]
    CapacityExceeded {
        /// Number of movable students.
        count: usize,
        /// Number of movable positions.
        capacity: usize,
    },

    /// The annealing configuration failed validation.
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),

    /// A pinned seat names an occupant that is not in the roster.
    #[error("pinned occupant '{name}' is not in the roster")]
    UnknownStudent {
        /// The missing occupant name.
        name: String,
    },

    /// A student is pinned to more than one seat.
    #[error("student '{name}' is pinned to more than one seat")]
    DuplicatePin {
        /// The doubly pinned student name.
        name: String,
    },
}
