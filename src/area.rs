//! Preferred-area expression parser.
//!
//! Students may carry a small textual expression naming a rectangular
//! region of the grid they would rather sit in:
//!
//! | Input (1-indexed) | Meaning |
//! |-------------------|---------|
//! | `"2,3"` | the single cell at row 2, column 3 |
//! | `"1,1-3,4"` | the rectangle spanning the two corners |
//!
//! Corners may be given in any order; row and column bounds are
//! normalized independently. Anything that does not parse — empty
//! input, missing fields, non-numeric or zero components — yields
//! `None`, meaning "no constraint". The leniency is policy, not an
//! oversight: malformed preference data must never abort a search,
//! and tightening it into an error would silently change optimization
//! outcomes for existing rosters.

use crate::model::SeatPos;

/// A rectangular grid region, zero-indexed and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaBounds {
    /// Smallest row index inside the region.
    pub min_row: usize,
    /// Smallest column index inside the region.
    pub min_col: usize,
    /// Largest row index inside the region.
    pub max_row: usize,
    /// Largest column index inside the region.
    pub max_col: usize,
}

impl AreaBounds {
    /// Builds the bounds spanning two corner cells, normalizing row
    /// and column bounds independently.
    pub fn from_corners(a: (usize, usize), b: (usize, usize)) -> Self {
        Self {
            min_row: a.0.min(b.0),
            min_col: a.1.min(b.1),
            max_row: a.0.max(b.0),
            max_col: a.1.max(b.1),
        }
    }

    /// Whether the position lies inside the region.
    pub fn contains(&self, pos: SeatPos) -> bool {
        pos.row >= self.min_row
            && pos.row <= self.max_row
            && pos.col >= self.min_col
            && pos.col <= self.max_col
    }
}

/// Parses a preferred-area expression.
///
/// Returns `None` for anything other than a well-formed `"r,c"` or
/// `"r1,c1-r2,c2"` with all components ≥ 1. Components are trimmed, so
/// `" 2 , 3 "` is accepted.
pub fn parse(input: &str) -> Option<AreaBounds> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    let mut corners = text.split('-');
    let first = parse_cell(corners.next()?)?;
    match corners.next() {
        None => Some(AreaBounds::from_corners(first, first)),
        Some(second) => {
            let second = parse_cell(second)?;
            if corners.next().is_some() {
                return None; // three or more corners
            }
            Some(AreaBounds::from_corners(first, second))
        }
    }
}

/// Parses one `"r,c"` component into zero-indexed coordinates.
/// The textual form is 1-indexed; `0` is out of range and lenient
/// parsing maps it to `None` like any other malformed component.
fn parse_cell(text: &str) -> Option<(usize, usize)> {
    let (row, col) = text.split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    if row == 0 || col == 0 {
        return None;
    }
    Some((row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_cell() {
        assert_eq!(
            parse("2,3"),
            Some(AreaBounds {
                min_row: 1,
                min_col: 2,
                max_row: 1,
                max_col: 2
            })
        );
    }

    #[test]
    fn test_rectangle() {
        assert_eq!(
            parse("1,1-3,3"),
            Some(AreaBounds {
                min_row: 0,
                min_col: 0,
                max_row: 2,
                max_col: 2
            })
        );
    }

    #[test]
    fn test_corners_normalized() {
        assert_eq!(
            parse("3,1-1,1"),
            Some(AreaBounds {
                min_row: 0,
                min_col: 0,
                max_row: 2,
                max_col: 0
            })
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse(" 2 , 3 "), parse("2,3"));
        assert_eq!(parse("1,1 - 3,3"), parse("1,1-3,3"));
    }

    #[test]
    fn test_malformed_is_unconstrained() {
        for input in [
            "", "   ", "abc", "1", "1,", ",1", "1,2,3", "1,1-", "-1,1", "1,1-2,2-3,3", "a,b",
            "1.5,2", "1,1~2,2",
        ] {
            assert_eq!(parse(input), None, "input {input:?} should not parse");
        }
    }

    #[test]
    fn test_zero_component_is_unconstrained() {
        // Input coordinates are 1-indexed; zero is malformed, and
        // malformed means "no constraint".
        assert_eq!(parse("0,1"), None);
        assert_eq!(parse("1,0"), None);
        assert_eq!(parse("1,1-0,2"), None);
    }

    #[test]
    fn test_contains() {
        let bounds = parse("1,1-2,3").unwrap();
        assert!(bounds.contains(SeatPos::new(0, 0)));
        assert!(bounds.contains(SeatPos::new(1, 2)));
        assert!(!bounds.contains(SeatPos::new(2, 0)));
        assert!(!bounds.contains(SeatPos::new(0, 3)));
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(input in ".*") {
            let _ = parse(&input);
        }

        #[test]
        fn prop_corner_order_is_irrelevant(
            r1 in 1usize..100, c1 in 1usize..100,
            r2 in 1usize..100, c2 in 1usize..100,
        ) {
            let forward = parse(&format!("{r1},{c1}-{r2},{c2}")).unwrap();
            let backward = parse(&format!("{r2},{c2}-{r1},{c1}")).unwrap();
            prop_assert_eq!(forward, backward);
            prop_assert!(forward.min_row <= forward.max_row);
            prop_assert!(forward.min_col <= forward.max_col);
            prop_assert!(forward.contains(SeatPos::new(r1 - 1, c1 - 1)));
            prop_assert!(forward.contains(SeatPos::new(r2 - 1, c2 - 1)));
        }
    }
}
