//! Terminal output formatting
//!
//! Display utilities for the line-based mode, plus helpers shared with the TUI.

pub mod display;
pub mod formatters;
pub mod sound;

pub use display::{print_round_result, print_round_status};
pub use sound::Cue;
