//! Command implementations

pub mod simple;

pub use simple::{Command, run_simple};
