//! Board representation and position hashing.
//!
//! - `ZobristTable`: per-(cell, occupant) random codes
//! - `Board`: occupancy, incremental hash, incremental win detection

pub mod zobrist;
pub mod grid;

pub use zobrist::ZobristTable;
pub use grid::{Board, NUM_IN_ROW};
