//! Letter board projection
//!
//! Decides which letters of the target word are visible. Pure function of the
//! word, the guessed letters and the reveal flag.

use crate::core::{Letter, TargetWord};

/// Placeholder shown for a hidden letter
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Guessed, or the always-shown first letter
    Guessed,
    /// Not guessed but shown because the round was lost
    Revealed,
    Hidden,
}

/// One position of the word on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Letter,
    pub state: TileState,
}

impl Tile {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.state != TileState::Hidden
    }

    /// The character to draw: the letter when visible, the placeholder otherwise
    #[must_use]
    pub fn display(self) -> char {
        if self.is_visible() {
            self.letter.as_char()
        } else {
            PLACEHOLDER
        }
    }
}

/// Project the word onto tiles, left to right
///
/// The first letter of the word counts as guessed wherever it appears.
///
/// # Examples
/// ```
/// use hangman::core::{Letter, TargetWord};
/// use hangman::game::board::project;
///
/// let word = TargetWord::new("rocket").unwrap();
/// let guessed = [Letter::new('k').unwrap()];
/// let shown: String = project(&word, &guessed, false)
///     .iter()
///     .map(|tile| tile.display())
///     .collect();
/// assert_eq!(shown, "R__K__");
/// ```
#[must_use]
pub fn project(word: &TargetWord, guessed: &[Letter], reveal: bool) -> Vec<Tile> {
    let first = word.first_letter();

    word.letters()
        .iter()
        .map(|&letter| {
            let state = if letter == first || guessed.contains(&letter) {
                TileState::Guessed
            } else if reveal {
                TileState::Revealed
            } else {
                TileState::Hidden
            };
            Tile { letter, state }
        })
        .collect()
}
