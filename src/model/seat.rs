//! Seat and seat-grid models.
//!
//! A grid snapshot is the editor-side view of the classroom: every
//! cell knows whether it is disabled, whether its occupant is pinned,
//! and who currently sits there. [`SeatGrid::partition`] splits the
//! snapshot into the three position classes the optimizer works with.

use serde::{Deserialize, Serialize};

/// A grid cell coordinate, zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatPos {
    /// Row index (0 = front row).
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl SeatPos {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(self, other: SeatPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// One seat cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Grid coordinate.
    pub pos: SeatPos,
    /// Pinned flag: the occupant, if any, must never be moved.
    pub fixed: bool,
    /// Disabled flag: the seat must never receive an occupant.
    pub disabled: bool,
    /// Current occupant name, if any.
    pub occupant: Option<String>,
}

impl Seat {
    /// Creates an enabled, unpinned, empty seat.
    pub fn new(pos: SeatPos) -> Self {
        Self {
            pos,
            fixed: false,
            disabled: false,
            occupant: None,
        }
    }
}

/// A rows × cols seat grid snapshot, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatGrid {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Seats in row-major order (`row * cols + col`).
    pub seats: Vec<Seat>,
}

/// Position classes produced by [`SeatGrid::partition`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridPartition {
    /// Seats eligible to receive any non-fixed occupant.
    pub movable: Vec<SeatPos>,
    /// Pinned occupant name → seat, excluded from swapping.
    pub fixed: Vec<(String, SeatPos)>,
    /// Seats that must stay empty.
    pub disabled: Vec<SeatPos>,
}

impl SeatGrid {
    /// Creates a grid of enabled, empty seats.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut seats = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                seats.push(Seat::new(SeatPos::new(row, col)));
            }
        }
        Self { rows, cols, seats }
    }

    /// Returns the seat at `(row, col)`.
    pub fn seat(&self, row: usize, col: usize) -> &Seat {
        &self.seats[row * self.cols + col]
    }

    /// Returns the seat at `(row, col)` mutably.
    pub fn seat_mut(&mut self, row: usize, col: usize) -> &mut Seat {
        &mut self.seats[row * self.cols + col]
    }

    /// Places `name` on the seat without pinning.
    pub fn occupy(&mut self, row: usize, col: usize, name: impl Into<String>) {
        self.seat_mut(row, col).occupant = Some(name.into());
    }

    /// Places `name` on the seat and pins it there.
    pub fn pin(&mut self, row: usize, col: usize, name: impl Into<String>) {
        let seat = self.seat_mut(row, col);
        seat.occupant = Some(name.into());
        seat.fixed = true;
    }

    /// Marks the seat as unusable.
    pub fn disable(&mut self, row: usize, col: usize) {
        self.seat_mut(row, col).disabled = true;
    }

    /// Total number of seats.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Splits the grid into movable, fixed-occupied, and disabled
    /// positions.
    ///
    /// A seat is movable when it is not disabled and not
    /// fixed-occupied. A pinned seat without an occupant has nothing
    /// to protect and therefore counts as movable; keeping a seat
    /// empty is what `disabled` is for. A disabled seat is disabled
    /// regardless of its other flags.
    ///
    /// Occupants of non-fixed seats are transient editor state and do
    /// not appear in the partition: the optimizer re-seats those
    /// students from scratch.
    pub fn partition(&self) -> GridPartition {
        let mut partition = GridPartition::default();
        for seat in &self.seats {
            if seat.disabled {
                partition.disabled.push(seat.pos);
            } else if seat.fixed {
                match &seat.occupant {
                    Some(name) => partition.fixed.push((name.clone(), seat.pos)),
                    None => partition.movable.push(seat.pos),
                }
            } else {
                partition.movable.push(seat.pos);
            }
        }
        partition
    }
}
