//! Zobrist position codes.
//!
//! Every `(cell, occupant)` pair, with occupant one of empty/Black/White,
//! gets a random 64-bit code. A position's hash is the XOR of the codes of
//! every cell's current occupant. XOR is associative, commutative and
//! self-inverse, so changing one cell is "XOR out old code, XOR in new
//! code" regardless of the rest of the board.
//!
//! Equal occupancy always gives equal hashes. The converse holds only up
//! to 64-bit collisions, which is acceptable for equality and repetition
//! bookkeeping but is not an exact comparison.

use crate::core::{GameRng, Point, Side};

/// Occupant slots per cell: empty, Black, White.
const SLOTS: usize = 3;

/// Position-code table for one board geometry.
///
/// Built once per game configuration and shared (via `Arc`) by every
/// board derived from it.
#[derive(Clone, PartialEq, Eq)]
pub struct ZobristTable {
    rows: usize,
    cols: usize,
    codes: Vec<[u64; SLOTS]>,
    empty_board: u64,
}

impl ZobristTable {
    /// Generate codes for a `rows` x `cols` grid from `seed`.
    ///
    /// The same seed and dimensions always give the same table.
    #[must_use]
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("zobrist");

        let codes: Vec<[u64; SLOTS]> = (0..rows * cols)
            .map(|_| [rng.next_u64(), rng.next_u64(), rng.next_u64()])
            .collect();
        let empty_board = codes.iter().fold(0, |hash, cell| hash ^ cell[0]);

        Self {
            rows,
            cols,
            codes,
            empty_board,
        }
    }

    /// Grid dimensions this table covers.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Hash of the all-empty board.
    #[must_use]
    pub fn empty_board(&self) -> u64 {
        self.empty_board
    }

    /// Code for `occupant` at `point`.
    ///
    /// `point` must be on the grid.
    #[must_use]
    pub fn code(&self, point: Point, occupant: Option<Side>) -> u64 {
        let cell = (point.row as usize - 1) * self.cols + (point.col as usize - 1);
        let slot = occupant.map_or(0, |side| side.index() + 1);
        self.codes[cell][slot]
    }

    /// Hash delta for a stone of `side` landing on an empty `point`.
    #[must_use]
    pub fn placement_delta(&self, point: Point, side: Side) -> u64 {
        self.code(point, None) ^ self.code(point, Some(side))
    }

    /// Hash of a position, computed from scratch.
    ///
    /// Boards maintain their hash incrementally; this is the reference
    /// value that incremental maintenance must agree with.
    #[must_use]
    pub fn hash_position(&self, stones: impl IntoIterator<Item = (Point, Side)>) -> u64 {
        stones
            .into_iter()
            .fold(self.empty_board, |hash, (point, side)| {
                hash ^ self.placement_delta(point, side)
            })
    }
}

impl std::fmt::Debug for ZobristTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZobristTable")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("empty_board", &format_args!("{:#018x}", self.empty_board))
            .finish_non_exhaustive()
    }
}
