//! Core engine types: points, sides, RNG, configuration, errors.
//!
//! These are the value types every other module builds on.

pub mod point;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use point::{Direction, Point, LINES};
pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{BoardSize, GameConfig, DEFAULT_ZOBRIST_SEED};
pub use error::EngineError;
