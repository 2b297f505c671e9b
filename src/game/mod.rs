//! Game flow: moves, the persistent state machine, and scoring.
//!
//! - `Move`: play / pass / resign
//! - `GameState`: immutable state node with legality and termination queries
//! - `GameResult` / `compute_game_result`: tie-break scoring by longest run

pub mod moves;
pub mod state;
pub mod scoring;

pub use moves::Move;
pub use state::GameState;
pub use scoring::{compute_game_result, longest_runs, GameResult};
