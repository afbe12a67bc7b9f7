//! Game constants and the difficulty selector

use std::fmt;
use std::time::Duration;

/// Total letters (right or wrong) a round accepts before it is lost
pub const MAX_GUESSES: usize = 6;

/// Score added for a letter that is in the word
pub const CORRECT_REWARD: u32 = 10;

/// Score removed for a letter that is not in the word, floored at zero
pub const WRONG_PENALTY: u32 = 5;

/// Hints available at the start of every round
pub const STARTING_HINTS: u32 = 2;

/// How long the win celebration stays visible
pub const CELEBRATION: Duration = Duration::from_secs(5);

/// Store key for the persisted high score
pub const HIGH_SCORE_KEY: &str = "hangmanHighScore";

/// Difficulty tier shown in the selector
///
/// Only the label changes for now: every tier plays with the same hint budget
/// and guess limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy (More Hints)",
            Self::Medium => "Medium",
            Self::Hard => "Hard (Fewer Hints)",
        }
    }

    /// The next tier, wrapping from Hard back to Easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn next_cycles_through_all_tiers() {
        let mut tier = Difficulty::Easy;
        for expected in [Difficulty::Medium, Difficulty::Hard, Difficulty::Easy] {
            tier = tier.next();
            assert_eq!(tier, expected);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy (More Hints)");
        assert_eq!(Difficulty::Hard.label(), "Hard (Fewer Hints)");
    }
}
