//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `BoardSize`: square side length or explicit rows x cols
//! - `GameConfig`: board size plus the seed for the position-code table
//!
//! The position-code table is built from the config once and shared by
//! every board of the game, so it is never process-global state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::ZobristTable;

use super::error::EngineError;

/// Default seed for the position-code table.
///
/// Fixed so position hashes are reproducible across runs.
pub const DEFAULT_ZOBRIST_SEED: u64 = 0x5EED_0F_F1_7E_u64;

/// Board dimensions.
///
/// Deserializes from either a bare number (`19`) or `{"rows": 9, "cols": 13}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardSize {
    /// Square board with the given side length.
    Square(usize),
    /// Rectangular board.
    Rect { rows: usize, cols: usize },
}

impl BoardSize {
    /// `(rows, cols)` for this size.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Square(n) => (n, n),
            BoardSize::Rect { rows, cols } => (rows, cols),
        }
    }
}

impl From<usize> for BoardSize {
    fn from(n: usize) -> Self {
        BoardSize::Square(n)
    }
}

impl From<(usize, usize)> for BoardSize {
    fn from((rows, cols): (usize, usize)) -> Self {
        BoardSize::Rect { rows, cols }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions.
    pub size: BoardSize,

    /// Seed for the position-code table.
    #[serde(default = "default_zobrist_seed")]
    pub zobrist_seed: u64,
}

fn default_zobrist_seed() -> u64 {
    DEFAULT_ZOBRIST_SEED
}

impl GameConfig {
    /// Create a new game configuration with the default seed.
    pub fn new(size: impl Into<BoardSize>) -> Self {
        Self {
            size: size.into(),
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
        }
    }

    /// Set the position-code seed.
    #[must_use]
    pub fn with_zobrist_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }

    /// `(rows, cols)` of the configured board.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.size.dimensions()
    }

    /// Check that both dimensions are positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self.dimensions() {
            (rows, cols) if rows == 0 || cols == 0 => {
                Err(EngineError::InvalidDimensions { rows, cols })
            }
            _ => Ok(()),
        }
    }

    /// Validate, then build the position-code table for this board.
    pub fn build_zobrist(&self) -> Result<Arc<ZobristTable>, EngineError> {
        self.validate()?;
        let (rows, cols) = self.dimensions();
        Ok(Arc::new(ZobristTable::new(rows, cols, self.zobrist_seed)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(19)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_conversions() {
        assert_eq!(BoardSize::from(19).dimensions(), (19, 19));
        assert_eq!(BoardSize::from((9, 13)).dimensions(), (9, 13));
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new((6, 7)).with_zobrist_seed(99);

        assert_eq!(config.dimensions(), (6, 7));
        assert_eq!(config.zobrist_seed, 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.dimensions(), (19, 19));
        assert_eq!(config.zobrist_seed, DEFAULT_ZOBRIST_SEED);
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        assert_eq!(
            GameConfig::new((0, 5)).validate(),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert!(GameConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_build_zobrist() {
        let config = GameConfig::new((4, 6)).with_zobrist_seed(3);
        let table = config.build_zobrist().unwrap();

        assert_eq!(table.dimensions(), (4, 6));
        assert_eq!(
            table.empty_board(),
            ZobristTable::new(4, 6, 3).empty_board()
        );
        assert!(GameConfig::new(0).build_zobrist().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let square: GameConfig = serde_json::from_str(r#"{"size": 15}"#).unwrap();
        assert_eq!(square.size, BoardSize::Square(15));
        assert_eq!(square.zobrist_seed, DEFAULT_ZOBRIST_SEED);

        let rect: GameConfig =
            serde_json::from_str(r#"{"size": {"rows": 9, "cols": 13}, "zobrist_seed": 7}"#).unwrap();
        assert_eq!(rect.dimensions(), (9, 13));
        assert_eq!(rect.zobrist_seed, 7);
    }
}
