//! Move-selection policies.
//!
//! `Agent` is the one capability the engine consumes from the outside: given
//! a state, pick a move. How the choice is made (a fixed rule, a search, a
//! learned model) is up to the implementation.

use crate::core::GameRng;
use crate::game::{GameState, Move};

/// Chooses a move for the side to play.
pub trait Agent: Send {
    /// Pick a move for `state.next_player()`.
    ///
    /// Called once per ply, only on states that are not over.
    fn select_move(&mut self, state: &GameState) -> Move;
}

/// Any `FnMut(&GameState) -> Move` is an agent.
impl<F> Agent for F
where
    F: FnMut(&GameState) -> Move + Send,
{
    fn select_move(&mut self, state: &GameState) -> Move {
        self(state)
    }
}

/// Uniform random agent.
///
/// Selects uniformly from legal moves, resigning if there are none.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("agent"),
        }
    }

    /// Create an agent from an existing RNG (e.g. a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Move {
        let moves = state.legal_moves();
        self.rng.choose(&moves).copied().unwrap_or(Move::Resign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    #[test]
    fn test_random_agent_picks_legal_move() {
        let state = GameState::new_game(5).apply_move(Move::play(Point::new(3, 3)));
        let mut agent = RandomAgent::new(42);

        for _ in 0..20 {
            let mv = agent.select_move(&state);
            assert!(state.is_valid_move(mv));
        }
    }

    #[test]
    fn test_random_agent_deterministic() {
        let state = GameState::new_game(9);
        let mut a = RandomAgent::new(7);
        let mut b = RandomAgent::new(7);

        for _ in 0..10 {
            assert_eq!(a.select_move(&state), b.select_move(&state));
        }
    }

    #[test]
    fn test_random_agent_resigns_without_moves() {
        let over = GameState::new_game(5).apply_move(Move::resign());
        let mut agent = RandomAgent::new(1);

        assert_eq!(agent.select_move(&over), Move::Resign);
    }

    #[test]
    fn test_closure_agent() {
        let mut first_legal = |state: &GameState| state.legal_moves()[0];
        let state = GameState::new_game(3);

        assert_eq!(first_legal.select_move(&state), Move::play(Point::new(1, 1)));
    }
}
