//! Hangman target word representation
//!
//! A `TargetWord` stores the uppercase word along with the set of letters it
//! contains for fast membership checks.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden word of a round
///
/// Stores the word as letters and keeps the distinct letters in a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: Vec<Letter>,
    letter_set: FxHashSet<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string of any case
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("Rocket").unwrap();
    /// assert_eq!(word.text(), "ROCKET");
    ///
    /// assert!(TargetWord::new("two words").is_err());
    /// assert!(TargetWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<Letter> = text.bytes().map(Letter::from_upper_byte).collect();

        let letter_set: FxHashSet<Letter> = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            letter_set,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in word order, repeats included
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The first letter, which the board always shows
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Letter {
        self.letters[0]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letter_set.contains(&letter)
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<Letter> {
        let mut seen = Vec::with_capacity(self.letter_set.len());
        for &letter in &self.letters {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = TargetWord::new("apple").unwrap();
        assert_eq!(word.text(), "APPLE");

        let word2 = TargetWord::new("ApPlE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = TargetWord::new("  comet\n").unwrap();
        assert_eq!(word.text(), "COMET");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(TargetWord::new(""), Err(WordError::Empty));
        assert_eq!(TargetWord::new("   "), Err(WordError::Empty));
        assert_eq!(TargetWord::new("café"), Err(WordError::NonAscii));
        assert_eq!(
            TargetWord::new("ice cream"),
            Err(WordError::InvalidCharacters)
        );
        assert_eq!(TargetWord::new("r2d2"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_contains_is_case_insensitive() {
        let word = TargetWord::new("Tiger").unwrap();
        assert!(word.contains(letter('t')));
        assert!(word.contains(letter('G')));
        assert!(!word.contains(letter('z')));
    }

    #[test]
    fn repeated_letters_are_one_member() {
        let word = TargetWord::new("banana").unwrap();
        assert!(word.contains(letter('a')));
        assert!(word.contains(letter('n')));
        assert_eq!(word.len(), 6);
        assert_eq!(word.distinct_letters().len(), 3);
    }

    #[test]
    fn distinct_letters_keep_first_appearance_order() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(
            word.distinct_letters(),
            vec![letter('b'), letter('a'), letter('n')]
        );
    }

    #[test]
    fn first_letter_and_len() {
        let word = TargetWord::new("sun").unwrap();
        assert_eq!(word.first_letter(), letter('S'));
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("cat").unwrap();
        assert_eq!(format!("{word}"), "CAT");
    }
}
