//! The two sides and per-side data storage.
//!
//! ## Side
//!
//! One of the two players. Used both as stone owner and as "whose turn".
//! Black always moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, for O(1) per-side lookups.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// First player.
    Black,
    /// Second player.
    White,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// The opposing side.
    ///
    /// ```
    /// use rust_gomoku::core::Side;
    ///
    /// assert_eq!(Side::Black.other(), Side::White);
    /// assert_eq!(Side::White.other().other(), Side::White);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Slot index (0 for Black, 1 for White).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Single-letter label used in board diagrams.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_gomoku::core::{Side, SideMap};
///
/// let mut runs: SideMap<usize> = SideMap::with_value(0);
/// runs[Side::White] = 3;
/// assert_eq!(runs[Side::Black], 0);
/// assert_eq!(runs[Side::White], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Black), factory(Side::White)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.other(), side);
            assert_eq!(side.other().other(), side);
        }
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Black.to_string(), "Black");
        assert_eq!(Side::White.to_string(), "White");
        assert_eq!(Side::Black.symbol(), 'X');
        assert_eq!(Side::White.symbol(), 'O');
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);

        assert_eq!(map[Side::Black], 0);
        assert_eq!(map[Side::White], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Side::Black] = 4;
        *map.get_mut(Side::White) += 2;

        assert_eq!(map[Side::Black], 4);
        assert_eq!(map[Side::White], 2);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|s| s.index());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Side::Black, &0), (Side::White, &1)]);
    }
}
