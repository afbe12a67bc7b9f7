//! Interactive TUI interface
//!
//! Ratatui front end: on-screen keyboard, word board, score header and
//! win/lose dialogs over a single `Game`.

pub mod app;
pub mod keyboard;
pub mod rendering;

pub use app::{App, run_tui};
pub use keyboard::Keyboard;
