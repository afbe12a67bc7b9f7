//! A single guessable letter

use std::fmt;

/// One uppercase ASCII letter, `A` through `Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Case-fold a character into a `Letter`
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert!(Letter::new('7').is_none());
    /// ```
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_upper_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The letter as an uppercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
