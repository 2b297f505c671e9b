//! Moves: place a stone, pass, or resign.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Point};

/// A move by the side to play.
///
/// Pass and resign are both treated as a forfeit by the mover; see
/// `GameState::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the point.
    Play(Point),
    /// Pass the turn.
    Pass,
    /// Resign the game.
    Resign,
}

impl Move {
    /// Place a stone at `point`.
    #[must_use]
    pub const fn play(point: Point) -> Self {
        Move::Play(point)
    }

    /// Pass the turn.
    #[must_use]
    pub const fn pass_turn() -> Self {
        Move::Pass
    }

    /// Resign the game.
    #[must_use]
    pub const fn resign() -> Self {
        Move::Resign
    }

    /// Build a move from flag-style parts.
    ///
    /// # Panics
    ///
    /// Unless exactly one of `point`, `is_pass`, `is_resign` is set.
    #[must_use]
    pub fn from_flags(point: Option<Point>, is_pass: bool, is_resign: bool) -> Self {
        match Self::try_from_flags(point, is_pass, is_resign) {
            Ok(mv) => mv,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a move from flag-style parts, rejecting zero or several
    /// active choices.
    pub fn try_from_flags(
        point: Option<Point>,
        is_pass: bool,
        is_resign: bool,
    ) -> Result<Self, EngineError> {
        match (point, is_pass, is_resign) {
            (Some(point), false, false) => Ok(Move::Play(point)),
            (None, true, false) => Ok(Move::Pass),
            (None, false, true) => Ok(Move::Resign),
            _ => Err(EngineError::AmbiguousMove),
        }
    }

    /// True for a stone placement.
    #[must_use]
    pub const fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    /// True for a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// True for a resignation.
    #[must_use]
    pub const fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// The target point of a placement.
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            Move::Pass | Move::Resign => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(point) => write!(f, "{point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}
