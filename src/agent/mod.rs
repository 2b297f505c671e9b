//! The move-selection seam and a minimal game driver.
//!
//! - `Agent`: given a state, choose a move
//! - `RandomAgent`: uniform over legal moves
//! - `simulate_game`: play one game between two agents

pub mod policy;
pub mod self_play;

pub use policy::{Agent, RandomAgent};
pub use self_play::{simulate_game, GameRecord};
