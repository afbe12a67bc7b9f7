//! Word lists for hangman
//!
//! Provides the embedded word list compiled into the binary and the
//! `WordSource` that rounds draw their target word from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::WordSource;
