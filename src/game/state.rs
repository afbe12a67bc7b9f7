//! Round state and the guess/hint/reset transitions
//!
//! Every operation is total: anything that does not apply to the current state
//! (a repeated letter, a guess after the round ended, a hint with no budget)
//! leaves the state untouched.

use super::board::{self, Tile};
use super::rules::{
    CELEBRATION, CORRECT_REWARD, Difficulty, HIGH_SCORE_KEY, MAX_GUESSES, STARTING_HINTS,
    WRONG_PENALTY,
};
use super::storage::ScoreStore;
use crate::core::{Letter, TargetWord};
use crate::wordlists::WordSource;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where the round stands, derived from the guessed letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a single letter submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Already guessed, or the round was over
    Ignored,
    /// In the word; carries the outcome after the guess
    Correct(Outcome),
    /// Not in the word; carries the outcome after the guess
    Wrong(Outcome),
}

impl GuessResult {
    /// Outcome after the guess, `None` if it was ignored
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Ignored => None,
            Self::Correct(outcome) | Self::Wrong(outcome) => Some(outcome),
        }
    }
}

/// Hangman game: the single owner of round state
///
/// Generic over the high score store and the random source so tests can use
/// an in-memory store and a seeded RNG.
pub struct Game<S: ScoreStore, R: Rng = StdRng> {
    words: WordSource,
    store: S,
    rng: R,
    target: TargetWord,
    guessed: Vec<Letter>,
    score: u32,
    hints_left: u32,
    high_score: u32,
    difficulty: Difficulty,
    celebration_until: Option<Instant>,
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    /// Create a game and start its first round
    ///
    /// The high score is read from `store` once, here.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    /// use hangman::game::{Game, MemoryStore};
    /// use hangman::wordlists::{WordSource, loader::words_from_slice};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let words = WordSource::new(words_from_slice(&["cat"])).unwrap();
    /// let mut game = Game::new(words, MemoryStore::new(), StdRng::seed_from_u64(1));
    ///
    /// for c in ['c', 'a', 't'] {
    ///     game.submit_letter(Letter::new(c).unwrap());
    /// }
    /// assert!(game.is_win());
    /// assert_eq!(game.score(), 30);
    /// ```
    pub fn new(words: WordSource, store: S, mut rng: R) -> Self {
        let high_score = store.get(HIGH_SCORE_KEY);
        let target = words.pick(&mut rng).clone();
        info!(words = words.len(), high_score, "game created");
        debug!(word = %target, "round started");

        Self {
            words,
            store,
            rng,
            target,
            guessed: Vec::new(),
            score: 0,
            hints_left: STARTING_HINTS,
            high_score,
            difficulty: Difficulty::default(),
            celebration_until: None,
        }
    }

    /// Guess a letter
    ///
    /// Ignored if the letter was already guessed or the round is over.
    /// Otherwise the letter is recorded and the score moves by the reward or
    /// penalty. Winning starts the celebration and saves a beaten high score.
    pub fn submit_letter(&mut self, letter: Letter) -> GuessResult {
        if self.is_guessed(letter) || self.is_over() {
            return GuessResult::Ignored;
        }

        self.guessed.push(letter);

        let result = if self.target.contains(letter) {
            self.score += CORRECT_REWARD;
            GuessResult::Correct(self.outcome())
        } else {
            self.score = self.score.saturating_sub(WRONG_PENALTY);
            GuessResult::Wrong(self.outcome())
        };
        debug!(%letter, ?result, score = self.score, "letter guessed");

        match result.outcome() {
            Some(Outcome::Won) => self.record_win(),
            Some(Outcome::Lost) => info!(word = %self.target, "round lost"),
            _ => {}
        }

        result
    }

    /// Guess a random still-hidden letter of the word, spending one hint
    ///
    /// Returns `None` without changing anything if no hints are left, the
    /// round is over, or every letter is already guessed. The usual reward or
    /// penalty applies to the hinted letter.
    pub fn use_hint(&mut self) -> Option<(Letter, GuessResult)> {
        if self.hints_left == 0 || self.is_over() {
            return None;
        }

        let hidden: Vec<Letter> = self
            .target
            .distinct_letters()
            .into_iter()
            .filter(|&letter| !self.is_guessed(letter))
            .collect();
        let letter = *hidden.choose(&mut self.rng)?;

        let result = self.submit_letter(letter);
        self.hints_left -= 1;
        debug!(%letter, hints_left = self.hints_left, "hint used");

        Some((letter, result))
    }

    /// Start a fresh round with a new random word
    ///
    /// Difficulty and high score carry over.
    pub fn reset_round(&mut self) {
        self.guessed.clear();
        self.target = self.words.pick(&mut self.rng).clone();
        self.score = 0;
        self.hints_left = STARTING_HINTS;
        self.celebration_until = None;
        debug!(word = %self.target, "round started");
    }

    fn record_win(&mut self) {
        self.celebration_until = Some(Instant::now() + CELEBRATION);
        info!(score = self.score, high_score = self.high_score, "round won");

        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.set(HIGH_SCORE_KEY, self.score) {
                warn!(error = %e, "could not save high score");
            }
        }
    }

    /// Expire the celebration once its time is up
    ///
    /// Returns true if the celebration ended on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.celebration_until {
            Some(until) if now >= until => {
                self.celebration_until = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_celebrating(&self, now: Instant) -> bool {
        self.celebration_until.is_some_and(|until| now < until)
    }

    /// True iff every letter of the word has been guessed
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.target
            .letters()
            .iter()
            .all(|letter| self.guessed.contains(letter))
    }

    /// True iff the guess limit is reached without a win
    #[must_use]
    pub fn is_lose(&self) -> bool {
        self.guessed.len() >= MAX_GUESSES && !self.is_win()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_win() {
            Outcome::Won
        } else if self.is_lose() {
            Outcome::Lost
        } else {
            Outcome::Playing
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guessed.len())
    }

    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Whether a hint would currently do anything
    #[must_use]
    pub fn can_hint(&self) -> bool {
        self.hints_left > 0 && !self.is_over()
    }

    /// Guessed letters that are not in the word, in guess order
    #[must_use]
    pub fn incorrect_letters(&self) -> Vec<Letter> {
        self.guessed
            .iter()
            .copied()
            .filter(|&letter| !self.target.contains(letter))
            .collect()
    }

    /// The board for the current round, fully revealed once lost
    #[must_use]
    pub fn board(&self) -> Vec<Tile> {
        board::project(&self.target, &self.guessed, self.is_lose())
    }

    #[must_use]
    pub fn target(&self) -> &TargetWord {
        &self.target
    }

    /// Guessed letters in guess order
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn hints_left(&self) -> u32 {
        self.hints_left
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[cfg(test)]
    pub(crate) const fn store(&self) -> &S {
        &self.store
    }
}
