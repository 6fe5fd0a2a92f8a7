//! The state module contains the rules of the game: picking the secret word, applying letter and
//! whole-word guesses, and telling whether the game has been won or lost.
//!
//! Nothing in here knows about the terminal. The session drives a [`GameState`] and hands the
//! resulting [`Snapshot`] to whatever is drawing the game.

use std::collections::BTreeSet;

use tracing::debug;

use crate::art::frame_index;
use crate::selector::WordSelector;

/// The number of incorrect guesses allowed when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// The character shown in place of a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// This enum holds the reasons a game can't be started with a given configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfig {
    /// This variant is used when there are no candidate words to choose from.
    #[error("the word list is empty")]
    EmptyWordList,
    /// This variant is used when one of the candidates is empty or contains anything other than
    /// letters.
    #[error("'{0}' is not a word made up of letters only")]
    InvalidWord(String),
    /// This variant is used when the game would be lost before the first guess.
    #[error("the number of attempts must be at least one")]
    NoAttempts,
}

/// This enum holds the outcome of guessing a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter is part of the word and every occurrence of it has been revealed.
    Correct,
    /// The letter is not part of the word and cost one attempt.
    Incorrect,
    /// The guess was not a single letter, or the letter had already been tried. Nothing changed.
    Invalid,
}

/// This enum holds the outcome of guessing the whole word at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordGuessResult {
    /// The guess was wrong, which forfeits the game no matter how many attempts were left.
    Lose,
    /// The guess was right and the word is fully revealed.
    Win,
}

/// This enum holds the status of a game, derived from the revealed letters and the attempts used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The game is still going.
    InProgress,
    /// The player ran out of attempts.
    Lost,
    /// Every letter of the word is revealed.
    Won,
}

impl GameStatus {
    /// This function tells whether the game is over, in which case no more guesses are taken.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// This struct holds everything the interface needs to draw the game after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The index of the gallows frame to show.
    pub frame: usize,
    /// The letters tried so far, in alphabetical order.
    pub guessed: Vec<char>,
    /// The number of incorrect guesses.
    pub incorrect: u8,
    /// The number of incorrect guesses that loses the game.
    pub max_attempts: u8,
    /// The word with every unrevealed letter replaced by [`PLACEHOLDER`].
    pub revealed: String,
    /// The status of the game.
    pub status: GameStatus,
}

/// This struct holds a single game of hangman.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The letters submitted as single-letter guesses, right or wrong.
    guessed: BTreeSet<char>,
    /// The number of incorrect guesses, never above `max_attempts`.
    incorrect: u8,
    /// The number of incorrect guesses that loses the game.
    max_attempts: u8,
    /// One entry per letter of `word`, holding either that letter or the placeholder.
    revealed: Vec<char>,
    /// The secret word, in lowercase.
    word: String,
}

impl GameState {
    /// This function applies a single-letter guess.
    ///
    /// The input is lowercased first. Anything that isn't exactly one alphabetic character, or
    /// that was already guessed, is rejected without touching the game.
    pub fn guess_letter(&mut self, input: &str) -> GuessResult {
        let normalized = input.to_lowercase();
        let mut chars = normalized.chars();

        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return GuessResult::Invalid;
        };

        if !letter.is_alphabetic() {
            return GuessResult::Invalid;
        }

        if !self.guessed.insert(letter) {
            return GuessResult::Invalid;
        }

        let mut found = false;
        for (slot, secret) in self.revealed.iter_mut().zip(self.word.chars()) {
            if secret == letter {
                *slot = secret;
                found = true;
            }
        }

        if found {
            debug!(%letter, "correct letter");
            GuessResult::Correct
        } else {
            self.incorrect = self.incorrect.saturating_add(1).min(self.max_attempts);
            debug!(%letter, incorrect = self.incorrect, "incorrect letter");
            GuessResult::Incorrect
        }
    }

    /// This function applies a guess of the whole word. A wrong guess uses up every remaining
    /// attempt.
    pub fn guess_word(&mut self, candidate: &str) -> WordGuessResult {
        if candidate.to_lowercase() == self.word {
            self.revealed = self.word.chars().collect();
            debug!("word guessed");
            WordGuessResult::Win
        } else {
            self.incorrect = self.max_attempts;
            debug!("wrong word, game forfeited");
            WordGuessResult::Lose
        }
    }

    /// This function returns the letters guessed so far, in alphabetical order.
    #[must_use]
    pub fn guessed(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    /// This function returns the number of incorrect guesses.
    #[must_use]
    pub const fn incorrect(&self) -> u8 {
        self.incorrect
    }

    /// This function returns the number of incorrect guesses that loses the game.
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// This function throws away the current game and starts a new one, keeping the number of
    /// attempts.
    ///
    /// # Errors
    ///
    /// The function fails under the same conditions as [`GameState::start`], in which case the
    /// current game is left as it was.
    pub fn restart<W, S>(&mut self, words: &[W], selector: &mut S) -> Result<(), InvalidConfig>
    where
        W: AsRef<str>,
        S: WordSelector + ?Sized,
    {
        *self = Self::start(words, self.max_attempts, selector)?;
        Ok(())
    }

    /// This function returns the word as the player currently sees it, e.g. `jo_`.
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    /// This function returns everything needed to draw the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: frame_index(self.incorrect, self.max_attempts),
            guessed: self.guessed(),
            incorrect: self.incorrect,
            max_attempts: self.max_attempts,
            revealed: self.revealed(),
            status: self.status(),
        }
    }

    /// This function starts a new game with a word picked out of `words` by `selector`.
    ///
    /// # Errors
    ///
    /// The function fails with [`InvalidConfig`] if `words` is empty, if any of the words is empty
    /// or not made up of letters only, or if `max_attempts` is zero.
    ///
    /// An index past the end of the list from `selector` picks the last word.
    pub fn start<W, S>(
        words: &[W],
        max_attempts: u8,
        selector: &mut S,
    ) -> Result<Self, InvalidConfig>
    where
        W: AsRef<str>,
        S: WordSelector + ?Sized,
    {
        let mut candidates = normalize_words(words)?;

        if max_attempts == 0 {
            return Err(InvalidConfig::NoAttempts);
        }

        let last = candidates.len().saturating_sub(1);
        let index = selector.select(candidates.len()).min(last);
        let word = candidates.swap_remove(index);

        debug!(letters = word.chars().count(), max_attempts, "started a new game");

        Ok(Self {
            guessed: BTreeSet::new(),
            incorrect: 0,
            max_attempts,
            revealed: vec![PLACEHOLDER; word.chars().count()],
            word,
        })
    }

    /// This function returns the status of the game. A fully revealed word wins even if the
    /// attempts ran out at the same time.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.revealed.contains(&PLACEHOLDER) {
            GameStatus::Won
        } else if self.incorrect >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// This function returns the secret word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// This function lowercases the candidate words and checks that each one is a proper word.
fn normalize_words<W: AsRef<str>>(words: &[W]) -> Result<Vec<String>, InvalidConfig> {
    if words.is_empty() {
        return Err(InvalidConfig::EmptyWordList);
    }

    words
        .iter()
        .map(|word| {
            let lower = word.as_ref().to_lowercase();

            if !lower.is_empty() && lower.chars().all(char::is_alphabetic) {
                Ok(lower)
            } else {
                Err(InvalidConfig::InvalidWord(word.as_ref().to_owned()))
            }
        })
        .collect()
}
