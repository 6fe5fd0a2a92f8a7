//! This module contains the command-line interface of the game and the configuration it produces.
//!
//! Every option can also be given through an environment variable, and everything has a default,
//! so running the binary without arguments plays with the built-in word list and six attempts.

use std::sync::LazyLock;

use clap::Parser;
use regex::Regex;

use crate::state::DEFAULT_MAX_ATTEMPTS;

/// The words played with when none are given.
pub const DEFAULT_WORDS: [&str; 7] = [
    "crush",
    "cheer",
    "challenge",
    "programming",
    "development",
    "joy",
    "celebrate",
];

/// The pattern every word given on the command line must match.
const WORD_PATTERN: &str = r"\A\p{Alphabetic}+\z";

/// The compiled form of [`WORD_PATTERN`], built the first time a word is checked.
static WORD_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(WORD_PATTERN));

/// This struct holds the settings every game of a session is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// The number of incorrect guesses that loses a game.
    pub max_attempts: u8,
    /// The seed for picking words, if the sequence of words should be reproducible.
    pub seed: Option<u64>,
    /// The candidate secret words.
    pub words: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            words: DEFAULT_WORDS.iter().map(|&word| word.to_owned()).collect(),
        }
    }
}

/// This struct holds the command-line arguments, parsed with clap's derive API.
#[derive(Parser, Debug)]
#[command(name = "hangman", version, about)]
#[command(next_line_help = true)]
pub(crate) struct Cli {
    /// The number of incorrect guesses allowed before the game is lost.
    ///
    /// A wrong guess of the whole word always ends the game, whatever this is set to.
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    #[arg(env = "HANGMAN_MAX_ATTEMPTS", value_name = "ATTEMPTS")]
    max_attempts: u8,
    /// The seed for the word picker; games are picked at random if this is not set.
    #[arg(short, long)]
    #[arg(env = "HANGMAN_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// The words to pick the secret word from, separated by commas.
    ///
    /// Words must be made up of letters only and are lowercased. A built-in list is used when
    /// none are given.
    #[arg(short, long, value_delimiter = ',', value_parser = verify_word)]
    #[arg(env = "HANGMAN_WORDS", value_name = "WORDS")]
    words: Vec<String>,
}

impl Cli {
    /// This function turns the parsed arguments into the configuration for the session.
    pub(crate) fn into_config(self) -> GameConfig {
        let words = if self.words.is_empty() {
            GameConfig::default().words
        } else {
            self.words
        };

        GameConfig {
            max_attempts: self.max_attempts,
            seed: self.seed,
            words,
        }
    }
}

/// This function serves as a value parser for the `words` argument. It rejects anything that isn't
/// a single word made of letters and returns the word in lowercase.
fn verify_word(word: &str) -> Result<String, String> {
    let re = WORD_RE.as_ref().map_err(ToString::to_string)?;
    let word = word.trim();

    if re.is_match(word) {
        Ok(word.to_lowercase())
    } else {
        Err(format!("'{word}' should be made up of letters only"))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::{verify_word, Cli, GameConfig, DEFAULT_WORDS, WORD_RE};

    #[test]
    fn defaults() -> Result<(), clap::Error> {
        let config = Cli::try_parse_from(["hangman"])?.into_config();

        assert_eq!(config, GameConfig::default(), "no arguments gives the defaults");
        assert_eq!(config.max_attempts, 6, "six attempts");
        assert_eq!(config.words.len(), DEFAULT_WORDS.len(), "built-in words");
        Ok(())
    }

    #[test]
    fn explicit_arguments() -> Result<(), clap::Error> {
        let config = Cli::try_parse_from([
            "hangman",
            "--words",
            "Joy, Cheer",
            "-w",
            "crush",
            "-a",
            "3",
            "--seed",
            "7",
        ])?
        .into_config();

        assert_eq!(config.words, ["joy", "cheer", "crush"], "words are collected");
        assert_eq!(config.max_attempts, 3, "attempts");
        assert_eq!(config.seed, Some(7), "seed");
        Ok(())
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(
            Cli::try_parse_from(["hangman", "-a", "0"]).is_err(),
            "zero attempts"
        );
        assert!(
            Cli::try_parse_from(["hangman", "-w", "joy,t0y"]).is_err(),
            "digit in a word"
        );
        assert!(
            Cli::try_parse_from(["hangman", "-w", "two words"]).is_err(),
            "space in a word"
        );
    }

    #[test]
    fn word_parser() {
        assert!(WORD_RE.is_ok(), "pattern compiles");
        assert_eq!(verify_word("Crush"), Ok("crush".to_owned()), "lowercased");
        assert_eq!(verify_word(" joy "), Ok("joy".to_owned()), "trimmed");
        assert!(verify_word("").is_err(), "empty");
        assert!(verify_word("co-op").is_err(), "punctuation");
    }
}
