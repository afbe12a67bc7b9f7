//! Sound feedback cues
//!
//! A terminal has no mixer, so cues are a bell at most. Which cue fires is
//! decided from the guess result alone.

use crate::game::{GuessResult, Outcome};
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Wrong,
    Win,
    Lose,
}

impl Cue {
    /// The cue for a guess, `None` if the guess was ignored
    ///
    /// A guess that ends the round plays the win or lose cue instead of the
    /// correct or wrong one.
    #[must_use]
    pub const fn for_result(result: GuessResult) -> Option<Self> {
        match result {
            GuessResult::Ignored => None,
            GuessResult::Correct(Outcome::Won) | GuessResult::Wrong(Outcome::Won) => {
                Some(Self::Win)
            }
            GuessResult::Correct(Outcome::Lost) | GuessResult::Wrong(Outcome::Lost) => {
                Some(Self::Lose)
            }
            GuessResult::Correct(Outcome::Playing) => Some(Self::Correct),
            GuessResult::Wrong(Outcome::Playing) => Some(Self::Wrong),
        }
    }

    /// Correct guesses stay quiet
    #[must_use]
    pub const fn rings_bell(self) -> bool {
        !matches!(self, Self::Correct)
    }

    /// Play the cue on a terminal
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn play(self, out: &mut impl Write) -> io::Result<()> {
        debug!(cue = ?self, "sound");
        if self.rings_bell() {
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        Ok(())
    }
}
