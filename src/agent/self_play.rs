//! Playing a game between two agents.

use tracing::{debug, trace};

use crate::core::{EngineError, GameConfig, Side};
use crate::game::{compute_game_result, GameResult, GameState, Move};

use super::policy::Agent;

/// A finished game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    /// Moves in play order, Black first.
    pub moves: Vec<Move>,
    /// Final score.
    pub result: GameResult,
    /// Winner as reported by the final state.
    pub winner: Option<Side>,
    /// The terminal state, with its full history.
    pub final_state: GameState,
}

/// Play one game to completion.
///
/// Asks the side to move for a move and applies it until the game is over.
/// A move the engine rejects (e.g. an occupied point) aborts the game with
/// the engine's error.
pub fn simulate_game(
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    config: &GameConfig,
) -> Result<GameRecord, EngineError> {
    let mut state = GameState::try_with_config(config)?;

    while !state.is_over() {
        let side = state.next_player();
        let mv = match side {
            Side::Black => black.select_move(&state),
            Side::White => white.select_move(&state),
        };
        trace!(%side, %mv, ply = state.ply(), "move");
        state = state.try_apply_move(mv)?;
    }

    let result = compute_game_result(&state);
    let winner = state.winner();
    debug!(%result, plies = state.ply(), "game over");

    Ok(GameRecord {
        moves: state.moves(),
        result,
        winner,
        final_state: state,
    })
}
