//! Random target word selection

use crate::core::TargetWord;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A fixed, non-empty list of candidate words
///
/// Words are drawn by uniform random index through the caller's random
/// source, so a seeded RNG gives a reproducible word sequence.
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<TargetWord>,
}

impl WordSource {
    /// Wrap a word list
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn new(words: Vec<TargetWord>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Pick a random word
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &TargetWord {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_is_rejected() {
        assert!(WordSource::new(Vec::new()).is_none());
    }

    #[test]
    fn single_word_is_always_picked() {
        let source = WordSource::new(words_from_slice(&["cat"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(source.pick(&mut rng).text(), "CAT");
        }
    }

    #[test]
    fn picks_come_from_the_list() {
        let source = WordSource::new(words_from_slice(&["cat", "dog", "sun"])).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let word = source.pick(&mut rng).text();
            assert!(["CAT", "DOG", "SUN"].contains(&word));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let source = WordSource::new(words_from_slice(&["cat", "dog", "sun", "owl"])).unwrap();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let first: Vec<_> = (0..8).map(|_| source.pick(&mut a).clone()).collect();
        let second: Vec<_> = (0..8).map(|_| source.pick(&mut b).clone()).collect();
        assert_eq!(first, second);
    }
}
