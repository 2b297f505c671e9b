//! Final scoring.
//!
//! A completed run decides the game outright. When the board fills without
//! one, the side with the strictly longer best run wins the tie-break.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, NUM_IN_ROW};
use crate::core::{Point, Side, SideMap, LINES};

use super::state::GameState;

/// Longest run per side, plus the tie-break margin credited to White.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// Longest Black run.
    pub black: usize,
    /// Longest White run.
    pub white: usize,
    /// Tie-break margin added to White's run. Always 0 in this game.
    pub margin: usize,
}

impl GameResult {
    /// Result with no margin.
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self {
            black,
            white,
            margin: 0,
        }
    }

    /// The side with the longer run, or `None` on an exact tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        let white = self.white + self.margin;
        match self.black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// How far ahead the winner is.
    #[must_use]
    pub fn winning_margin(&self) -> usize {
        self.black.abs_diff(self.white + self.margin)
    }

    /// Run length credited to `side`.
    #[must_use]
    pub fn run_for(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(Side::Black) => write!(f, "B+{}", self.winning_margin()),
            Some(Side::White) => write!(f, "W+{}", self.winning_margin()),
            None => write!(f, "Draw"),
        }
    }
}

/// Score a game.
///
/// An explicit winner (completed run or forfeit) is credited with a full
/// run and the loser with zero. Otherwise the board is scanned once for
/// each side's longest run.
#[must_use]
pub fn compute_game_result(state: &GameState) -> GameResult {
    let board = state.board();
    match board.winner_flag() {
        Some(Side::Black) => GameResult::new(NUM_IN_ROW, 0),
        Some(Side::White) => GameResult::new(0, NUM_IN_ROW),
        None => {
            let runs = longest_runs(board);
            GameResult::new(runs[Side::Black], runs[Side::White])
        }
    }
}

/// Longest run per side, scanning row-major.
///
/// Stones already counted inside an earlier run are not used as the start
/// of another run, in any direction.
#[must_use]
pub fn longest_runs(board: &Board) -> SideMap<usize> {
    let mut best = SideMap::with_value(0);
    let mut consumed: FxHashSet<Point> = FxHashSet::default();

    for row in 1..=board.rows() as i32 {
        for col in 1..=board.cols() as i32 {
            let start = Point::new(row, col);
            if !consumed.insert(start) {
                continue;
            }
            let Some(side) = board.get(start) else {
                continue;
            };

            for dir in LINES {
                let extra = board.count_run(side, start, dir, NUM_IN_ROW);
                let mut cur = start;
                for _ in 0..extra {
                    cur = cur.step(dir);
                    consumed.insert(cur);
                }
                best[side] = best[side].max(extra + 1);
            }
        }
    }

    best
}
