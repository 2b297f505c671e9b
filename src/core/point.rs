//! Grid coordinates and line directions.
//!
//! Points are 1-based `(row, col)` pairs. A `Point` carries no notion of
//! validity; whether it lies on a given board is the board's question.

use serde::{Deserialize, Serialize};

/// A grid cell, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point one unit step away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        Self {
            row: self.row + direction.d_row,
            col: self.col + direction.d_col,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(r {}, c {})", self.row, self.col)
    }
}

/// A unit step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// The opposite unit step.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    /// True for the four axis-aligned steps.
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        self.d_row == 0 || self.d_col == 0
    }
}

/// The four line directions, one per line through a point:
/// vertical, main diagonal, horizontal, anti-diagonal.
///
/// Each entry's `reverse()` gives the other half of the line, so these
/// together with their reverses cover all eight neighbours.
pub const LINES: [Direction; 4] = [
    Direction::new(1, 0),
    Direction::new(1, 1),
    Direction::new(0, 1),
    Direction::new(-1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_reverse() {
        let p = Point::new(5, 5);
        for dir in LINES {
            assert_eq!(p.step(dir).step(dir.reverse()), p);
            assert_ne!(p.step(dir), p.step(dir.reverse()));
        }
    }

    #[test]
    fn test_lines_cover_all_neighbours() {
        let origin = Point::new(0, 0);
        let mut seen: Vec<Point> = LINES
            .iter()
            .flat_map(|&d| [origin.step(d), origin.step(d.reverse())])
            .collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&origin));
    }

    #[test]
    fn test_orthogonal() {
        let orthogonal = LINES.iter().filter(|d| d.is_orthogonal()).count();
        assert_eq!(orthogonal, 2);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(3, 14).to_string(), "(r 3, c 14)");
    }

    #[test]
    fn test_point_value_semantics() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        assert!(set.contains(&Point::new(1, 2)));
        assert!(!set.contains(&Point::new(2, 1)));
    }
}
