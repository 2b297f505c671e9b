//! The board: stone occupancy for one position.
//!
//! Only occupied points are stored, in an `im` persistent map, so cloning a
//! board is O(1) and the clone shares no mutable state with the original.
//! Each placement updates the position hash and checks for a winning run
//! through the new stone, so neither is ever recomputed from scratch.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use im::HashMap as ImHashMap;
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Direction, EngineError, Point, Side, DEFAULT_ZOBRIST_SEED, LINES};

use super::zobrist::ZobristTable;

/// Stones in a row needed to win.
pub const NUM_IN_ROW: usize = 5;

type Grid = ImHashMap<Point, Side, BuildHasherDefault<FxHasher>>;

/// Stone occupancy, position hash and winner flag for one position.
///
/// ## Invariants
///
/// - `stone_count()` equals the number of occupied points.
/// - The winner flag is written at most once and never cleared.
/// - `zobrist_hash()` always equals the table's from-scratch hash of the
///   current occupancy.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Grid,
    hash: u64,
    win: Option<Side>,
    stone_counter: usize,
    zobrist: Arc<ZobristTable>,
}

impl Board {
    /// Create an empty board with its own position-code table.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty board, rejecting zero dimensions.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self::with_table(Arc::new(ZobristTable::new(
            rows,
            cols,
            DEFAULT_ZOBRIST_SEED,
        ))))
    }

    /// Create an empty board sized and hashed by a shared table.
    #[must_use]
    pub fn with_table(zobrist: Arc<ZobristTable>) -> Self {
        let (rows, cols) = zobrist.dimensions();
        Self {
            rows,
            cols,
            grid: Grid::default(),
            hash: zobrist.empty_board(),
            win: None,
            stone_counter: 0,
            zobrist,
        }
    }

    // === Queries ===

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `point` lies on this board.
    #[must_use]
    pub fn is_on_grid(&self, point: Point) -> bool {
        point.row >= 1
            && point.col >= 1
            && point.row as usize <= self.rows
            && point.col as usize <= self.cols
    }

    /// The stone at `point`, if any.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<Side> {
        self.grid.get(&point).copied()
    }

    /// True if `point` is on the grid and holds a stone of `side`.
    #[must_use]
    pub fn is_players_stone(&self, side: Side, point: Point) -> bool {
        self.is_on_grid(point) && self.get(point) == Some(side)
    }

    /// Current position hash.
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    /// The table this board hashes with.
    #[must_use]
    pub fn zobrist_table(&self) -> &Arc<ZobristTable> {
        &self.zobrist
    }

    /// Side that completed a run or won by forfeit, if any.
    #[must_use]
    pub fn winner_flag(&self) -> Option<Side> {
        self.win
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.stone_counter
    }

    /// True when every point holds a stone.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.stone_counter >= self.rows * self.cols
    }

    /// All stones, in no particular order.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Side)> + '_ {
        self.grid.iter().map(|(&point, &side)| (point, side))
    }

    /// On-grid orthogonal neighbours of `point`.
    #[must_use]
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; 4]> {
        self.adjacent(point, true)
    }

    /// On-grid diagonal neighbours of `point`.
    #[must_use]
    pub fn corners(&self, point: Point) -> SmallVec<[Point; 4]> {
        self.adjacent(point, false)
    }

    fn adjacent(&self, point: Point, orthogonal: bool) -> SmallVec<[Point; 4]> {
        LINES
            .iter()
            .filter(|dir| dir.is_orthogonal() == orthogonal)
            .flat_map(|&dir| [point.step(dir), point.step(dir.reverse())])
            .filter(|&p| self.is_on_grid(p))
            .collect()
    }

    /// Never true: stones are never captured in this game.
    #[must_use]
    pub fn is_self_capture(&self, _side: Side, _point: Point) -> bool {
        false
    }

    /// Never true: stones are never captured in this game.
    #[must_use]
    pub fn will_capture(&self, _side: Side, _point: Point) -> bool {
        false
    }

    // === Placement ===

    /// Place a stone for `side` at `point`.
    ///
    /// # Panics
    ///
    /// If `point` is off the grid or occupied, or the board already has a
    /// winner. Callers only place moves already known to be legal.
    pub fn place_stone(&mut self, side: Side, point: Point) {
        if let Err(err) = self.try_place_stone(side, point) {
            panic!("{err}");
        }
    }

    /// Place a stone, reporting contract violations instead of panicking.
    ///
    /// On error the board is unchanged.
    pub fn try_place_stone(&mut self, side: Side, point: Point) -> Result<(), EngineError> {
        if !self.is_on_grid(point) {
            return Err(EngineError::OffGrid { point });
        }
        if self.grid.contains_key(&point) {
            return Err(EngineError::Occupied { point });
        }
        if let Some(winner) = self.win {
            return Err(EngineError::AlreadyWon { winner });
        }

        if self.completes_run(side, point) {
            debug!(%side, %point, "run of {} completed", NUM_IN_ROW);
            self.win = Some(side);
        }

        self.hash ^= self.zobrist.placement_delta(point, side);
        self.grid.insert(point, side);
        self.stone_counter += 1;
        Ok(())
    }

    /// Record a winner without placing a stone (forfeits).
    ///
    /// An existing winner is kept.
    pub(crate) fn declare_winner(&mut self, side: Side) {
        self.win.get_or_insert(side);
    }

    /// Would a `side` stone at `point` complete a run?
    ///
    /// Any new run must pass through the newest stone, so only the four
    /// lines through `point` are walked.
    fn completes_run(&self, side: Side, point: Point) -> bool {
        LINES.iter().any(|&dir| {
            let forward = self.count_run(side, point, dir, NUM_IN_ROW - 1);
            let backward = self.count_run(side, point, dir.reverse(), NUM_IN_ROW - 1);
            forward + backward + 1 >= NUM_IN_ROW
        })
    }

    /// Consecutive `side` stones strictly beyond `from` along `dir`,
    /// stopping after `max_steps`.
    pub(crate) fn count_run(&self, side: Side, from: Point, dir: Direction, max_steps: usize) -> usize {
        let mut count = 0;
        let mut cur = from.step(dir);
        while count < max_steps && self.is_players_stone(side, cur) {
            count += 1;
            cur = cur.step(dir);
        }
        count
    }
}

/// Boards compare by dimensions and position hash.
///
/// This is a 64-bit fingerprint comparison, not an exact occupancy check.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.hash == other.hash
    }
}

impl Eq for Board {}

/// Renders one line per row: `X` Black, `O` White, `.` empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.rows as i32 {
            for col in 1..=self.cols as i32 {
                if col > 1 {
                    write!(f, " ")?;
                }
                let symbol = self.get(Point::new(row, col)).map_or('.', Side::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
