//! WordPlay Hangman
//!
//! A hangman word-guessing game: reveal the hidden word one letter at a time
//! within six guesses, with scoring, hints and a persisted high score.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Letter;
//! use hangman::game::{Game, MemoryStore, Outcome};
//! use hangman::wordlists::{WordSource, loader::words_from_slice};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let words = WordSource::new(words_from_slice(&["dog"])).unwrap();
//! let mut game = Game::new(words, MemoryStore::new(), StdRng::seed_from_u64(0));
//!
//! game.submit_letter(Letter::new('o').unwrap());
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.outcome(), Outcome::Playing);
//! ```

// Core domain types
pub mod core;

// Game state, board projection and high score storage
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
