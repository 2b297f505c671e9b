//! # rust-gomoku
//!
//! A five-in-a-row board game engine built for RL self-play.
//!
//! ## Design Principles
//!
//! 1. **Incremental**: Each placement checks only the lines through the new
//!    stone for a win and updates the position hash by XOR, so neither cost
//!    grows with the board.
//!
//! 2. **Persistent States**: A `GameState` is never mutated. Moves produce
//!    new states that share structure with their parent, so any ancestor can
//!    be kept and branched from, even across threads.
//!
//! 3. **Configuration Over Globals**: The position-code table is built from
//!    a `GameConfig` and shared by the boards of a game, with a fixed seed
//!    for reproducible hashes.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board and history cloning via `im-rs`.
//!
//! - **Contract Violations Panic**: Placing on an occupied or off-grid point
//!   is a caller bug. Checked `try_*` variants return `EngineError` instead.
//!
//! ## Modules
//!
//! - `core`: Points, sides, RNG, configuration, errors
//! - `board`: Position hashing and the board
//! - `game`: Moves, game state, scoring
//! - `agent`: Move-selection seam and a game driver
//!
//! ## Example
//!
//! ```
//! use rust_gomoku::{GameState, Move, Point, Side};
//!
//! let mut state = GameState::new_game(19);
//! for col in 10..14 {
//!     state = state.apply_move(Move::play(Point::new(10, col)));
//!     state = state.apply_move(Move::play(Point::new(1, col)));
//! }
//! state = state.apply_move(Move::play(Point::new(10, 14)));
//!
//! assert!(state.is_over());
//! assert_eq!(state.winner(), Some(Side::Black));
//! ```

pub mod core;
pub mod board;
pub mod game;
pub mod agent;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, EngineError, GameConfig, GameRng, Point, Side, SideMap,
};

pub use crate::board::{Board, ZobristTable, NUM_IN_ROW};

pub use crate::game::{compute_game_result, GameResult, GameState, Move};

pub use crate::agent::{simulate_game, Agent, GameRecord, RandomAgent};
