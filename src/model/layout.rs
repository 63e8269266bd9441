//! Layout (candidate solution) model.
//!
//! A layout maps movable-position slots to student indices. Slot `i`
//! refers to entry `i` of the problem's movable position list; the
//! value is an index into the problem's student table, or `None` for
//! an empty seat. Index-based slots keep a swap cheap — one `Vec`
//! clone, no reference aliasing.

use serde::{Deserialize, Serialize};

/// A partial assignment of students to movable positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    slots: Vec<Option<usize>>,
}

impl Layout {
    /// Creates a layout with `slot_count` empty slots.
    pub fn empty(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Number of slots (movable positions), occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the layout has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Student index seated at `slot`, if any.
    pub fn student_at(&self, slot: usize) -> Option<usize> {
        self.slots[slot]
    }

    /// Seats `student` (or empties the slot) at `slot`.
    pub fn set(&mut self, slot: usize, student: Option<usize>) {
        self.slots[slot] = student;
    }

    /// Swaps the occupants of two slots. Either or both may be empty,
    /// and the two slots may coincide (a no-op).
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Iterates `(slot, student)` pairs over occupied slots.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, student)| student.map(|s| (slot, s)))
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layout() {
        let layout = Layout::empty(4);
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.occupied_count(), 0);
        assert!(layout.occupied().next().is_none());
    }

    #[test]
    fn test_set_and_query() {
        let mut layout = Layout::empty(3);
        layout.set(1, Some(7));
        assert_eq!(layout.student_at(0), None);
        assert_eq!(layout.student_at(1), Some(7));
        assert_eq!(layout.occupied_count(), 1);
        assert_eq!(layout.occupied().collect::<Vec<_>>(), vec![(1, 7)]);
    }

    #[test]
    fn test_swap_with_empty() {
        let mut layout = Layout::empty(3);
        layout.set(0, Some(1));

        layout.swap(0, 2);
        assert_eq!(layout.student_at(0), None);
        assert_eq!(layout.student_at(2), Some(1));
    }

    #[test]
    fn test_swap_same_slot_is_noop() {
        let mut layout = Layout::empty(2);
        layout.set(0, Some(5));
        let before = layout.clone();

        layout.swap(0, 0);
        assert_eq!(layout, before);

        layout.swap(1, 1); // both empty
        assert_eq!(layout, before);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut layout = Layout::empty(3);
        layout.set(0, Some(2));
        layout.set(2, Some(0));

        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
