//! Hangman game logic
//!
//! `Game` owns all round state; the board is a pure projection of it and the
//! high score goes through an injected `ScoreStore`.

pub mod board;
pub mod rules;
mod state;
pub mod storage;

pub use board::{Tile, TileState};
pub use rules::Difficulty;
pub use state::{Game, GuessResult, Outcome};
pub use storage::{FileStore, MemoryStore, ScoreStore, StoreError};
