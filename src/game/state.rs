//! Game state: an immutable, persistent node in the game's history.
//!
//! ## Lifecycle
//!
//! Every move produces a brand-new `GameState`; an existing state is never
//! mutated. Each state owns its board (copy-on-write from its parent via
//! `im`) and keeps a shared, read-only link to the state it came from, so
//! callers may hold on to any ancestor and branch from it freely, including
//! from several threads at once.
//!
//! ## Forfeits
//!
//! Pass and resign are not real moves in this game: either one ends the
//! game immediately as a loss for the mover. They follow the same
//! copy-on-write path as stone placements.

use std::sync::Arc;

use im::HashSet as ImHashSet;
use tracing::{debug, instrument};

use crate::board::{Board, ZobristTable};
use crate::core::{BoardSize, EngineError, GameConfig, Point, Side};

use super::moves::Move;
use super::scoring::compute_game_result;

/// One position in a game, plus the history that led to it.
#[derive(Clone)]
pub struct GameState {
    board: Board,
    next_player: Side,
    previous_state: Option<Arc<GameState>>,
    /// `(side to move, board hash)` of every ancestor.
    previous_states: ImHashSet<(Side, u64)>,
    last_move: Option<Move>,
    ply: usize,
}

impl GameState {
    /// Start a game on an empty board, Black to move.
    ///
    /// `size` is a side length (`19`) or `(rows, cols)`.
    ///
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new_game(size: impl Into<BoardSize>) -> Self {
        Self::with_config(&GameConfig::new(size))
    }

    /// Start a game from an explicit configuration.
    ///
    /// # Panics
    ///
    /// If the configuration is invalid.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Start a game from an explicit configuration, validating it first.
    #[instrument(level = "debug")]
    pub fn try_with_config(config: &GameConfig) -> Result<Self, EngineError> {
        Ok(Self::from_table(config.build_zobrist()?))
    }

    /// Start a game on a board sized and hashed by an existing table.
    ///
    /// Lets many games share one table instead of regenerating it.
    #[must_use]
    pub fn from_table(table: Arc<ZobristTable>) -> Self {
        Self {
            board: Board::with_table(table),
            next_player: Side::Black,
            previous_state: None,
            previous_states: ImHashSet::new(),
            last_move: None,
            ply: 0,
        }
    }

    // === Accessors ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn next_player(&self) -> Side {
        self.next_player
    }

    /// The state this one was produced from.
    #[must_use]
    pub fn previous_state(&self) -> Option<&GameState> {
        self.previous_state.as_deref()
    }

    /// The move that produced this state.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// `(side to move, board hash)` pairs of every ancestor.
    #[must_use]
    pub fn previous_states(&self) -> &ImHashSet<(Side, u64)> {
        &self.previous_states
    }

    /// Side to move together with the board.
    #[must_use]
    pub fn situation(&self) -> (Side, &Board) {
        (self.next_player, &self.board)
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Moves from the initial state to this one, in order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.ply);
        let mut cur = Some(self);
        while let Some(state) = cur {
            if let Some(mv) = state.last_move {
                moves.push(mv);
            }
            cur = state.previous_state();
        }
        moves.reverse();
        moves
    }

    // === Transitions ===

    /// Apply a move, producing the next state.
    ///
    /// A play places the mover's stone on a copy of the board. A pass or
    /// resign ends the game as a forfeit: the copy is flagged as won by the
    /// mover's opponent.
    ///
    /// # Panics
    ///
    /// If the game is over or the target point is off the grid or
    /// occupied. Draw moves from `legal_moves()` or check them with
    /// `is_valid_move()` first.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> GameState {
        match self.try_apply_move(mv) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    /// Apply a move, reporting contract violations instead of panicking.
    #[instrument(level = "trace", skip(self), fields(side = %self.next_player, ply = self.ply))]
    pub fn try_apply_move(&self, mv: Move) -> Result<GameState, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let mut next_board = self.board.clone();
        match mv {
            Move::Play(point) => next_board.try_place_stone(self.next_player, point)?,
            Move::Pass | Move::Resign => {
                debug!(side = %self.next_player, %mv, "forfeit");
                next_board.declare_winner(self.next_player.other());
            }
        }

        let mut previous_states = self.previous_states.clone();
        previous_states.insert((self.next_player, self.board.zobrist_hash()));

        Ok(GameState {
            board: next_board,
            next_player: self.next_player.other(),
            previous_state: Some(Arc::new(self.clone())),
            previous_states,
            last_move: Some(mv),
            ply: self.ply + 1,
        })
    }

    // === Queries ===

    /// True once a run is completed, a side forfeits, or the board fills.
    ///
    /// The initial state is never over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        if self.last_move.is_none() {
            return false;
        }
        self.board.winner_flag().is_some() || self.board.is_full()
    }

    /// Every empty point as a play, row-major. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        let (rows, cols) = (self.board.rows() as i32, self.board.cols() as i32);
        (1..=rows)
            .flat_map(|row| (1..=cols).map(move |col| Move::play(Point::new(row, col))))
            .filter(|&mv| self.is_valid_move(mv))
            .collect()
    }

    /// True if `mv` is a play onto an empty on-grid point of a game in
    /// progress.
    ///
    /// Pass and resign are never reported valid, although `apply_move`
    /// accepts them as forfeits.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        match mv {
            Move::Play(point) => {
                self.board.is_on_grid(point)
                    && self.board.get(point).is_none()
                    && !self.is_move_self_capture(self.next_player, mv)
                    && !self.does_move_violate_ko(self.next_player, mv)
            }
            Move::Pass | Move::Resign => false,
        }
    }

    /// Never true: there is no capturing in this game.
    #[must_use]
    pub fn is_move_self_capture(&self, side: Side, mv: Move) -> bool {
        mv.point()
            .is_some_and(|point| self.board.is_self_capture(side, point))
    }

    /// Never true: there is no ko rule in this game.
    #[must_use]
    pub fn does_move_violate_ko(&self, _side: Side, _mv: Move) -> bool {
        false
    }

    /// The winner, once the game is over.
    ///
    /// After a resignation the side to move (the one that did not resign)
    /// wins; otherwise the result is scored, and an exact tie gives `None`.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        if self.last_move == Some(Move::Resign) {
            return Some(self.next_player);
        }
        compute_game_result(self).winner()
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("next_player", &self.next_player)
            .field("last_move", &self.last_move)
            .field("ply", &self.ply)
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

// Unlink the ancestor chain iteratively so dropping a long game does not
// recurse once per move.
impl Drop for GameState {
    fn drop(&mut self) {
        let mut next = self.previous_state.take();
        while let Some(state) = next {
            match Arc::try_unwrap(state) {
                Ok(mut state) => next = state.previous_state.take(),
                Err(_) => break,
            }
        }
    }
}
