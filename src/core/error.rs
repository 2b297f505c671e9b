//! Engine errors.
//!
//! Every variant is a caller contract violation. The checked `try_*`
//! operations surface them as values; the unchecked operations panic with
//! the same message. Game outcomes such as a full board or a forfeit are
//! never errors.

use derive_more::{Display, Error};

use super::player::Side;
use super::point::Point;

/// Contract violation detected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Board dimensions must both be positive.
    #[display("Board dimensions must be positive, got {}x{}", rows, cols)]
    InvalidDimensions { rows: usize, cols: usize },

    /// Target point lies outside the grid.
    #[display("Point {} is off the grid", point)]
    OffGrid { point: Point },

    /// Target point already holds a stone.
    #[display("Point {} is already occupied", point)]
    Occupied { point: Point },

    /// A stone was placed after the board already had a winner.
    #[display("Board already won by {}", winner)]
    AlreadyWon { winner: Side },

    /// A move was built with zero or several of point/pass/resign.
    #[display("Move must be exactly one of play, pass or resign")]
    AmbiguousMove,

    /// A move was applied to a finished game.
    #[display("Game is already over")]
    GameOver,
}
