//! Core domain types for hangman
//!
//! Letters and target words are normalized to upper case on construction, so
//! every comparison elsewhere in the crate is case-insensitive for free.

mod letter;
mod word;

pub use letter::Letter;
pub use word::{TargetWord, WordError};
