//! The session module sits between the interface and the rules. It owns the running game, turns
//! the player's commands into moves, and words the feedback to show after each one.
//!
//! Once a game is won or lost, further guesses are refused here rather than inside the game state.

use std::fmt;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::selector::WordSelector;
use crate::state::{GameState, GameStatus, GuessResult, InvalidConfig, Snapshot, WordGuessResult};

/// This enum holds the commands the player can send to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// This variant submits a single-letter guess, exactly as typed.
    GuessLetter(String),
    /// This variant submits a guess of the whole word, exactly as typed.
    GuessWord(String),
    /// This variant throws the current game away and starts a new one.
    Restart,
}

/// This enum holds the feedback for the last command, to be shown next to the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The guessed letter is in the word.
    Correct(String),
    /// The guessed letter is not in the word.
    Incorrect(String),
    /// The letter guess was malformed or a repeat.
    Invalid,
    /// The game is over and the guess was ignored.
    Locked,
    /// A new game has just started.
    Welcome,
    /// The whole word was guessed right.
    WordCorrect,
    /// The whole word was guessed wrong.
    WordIncorrect,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Correct(ref letter) => write!(f, "Good guess: {letter}"),
            Self::Incorrect(ref letter) => write!(f, "Wrong guess: {letter}"),
            Self::Invalid => f.write_str("Invalid guess. Try again."),
            Self::Locked => f.write_str("The game is over. Restart to play again."),
            Self::Welcome => f.write_str("Guess a letter or try the whole word!"),
            Self::WordCorrect => f.write_str("Correct! You've guessed the word!"),
            Self::WordIncorrect => f.write_str("Incorrect word guess! You lose."),
        }
    }
}

/// This struct holds the one game being played, together with what's needed to start the next.
#[derive(Debug)]
pub struct Session<S> {
    /// The configuration every game of the session is started from.
    config: GameConfig,
    /// The source of randomness for picking words.
    selector: S,
    /// The game being played.
    state: GameState,
}

impl<S: WordSelector> Session<S> {
    /// This function applies a command and returns the feedback to show for it.
    ///
    /// # Errors
    ///
    /// The function only fails when restarting, if the configuration can't start a game.
    pub fn handle(&mut self, command: Command) -> Result<Feedback, InvalidConfig> {
        let feedback = match command {
            Command::Restart => {
                self.state.restart(&self.config.words, &mut self.selector)?;
                Feedback::Welcome
            }
            Command::GuessLetter(_) | Command::GuessWord(_) if self.status().is_terminal() => {
                Feedback::Locked
            }
            Command::GuessLetter(input) => match self.state.guess_letter(&input) {
                GuessResult::Correct => Feedback::Correct(input.to_lowercase()),
                GuessResult::Incorrect => Feedback::Incorrect(input.to_lowercase()),
                GuessResult::Invalid => Feedback::Invalid,
            },
            Command::GuessWord(candidate) => match self.state.guess_word(&candidate) {
                WordGuessResult::Lose => Feedback::WordIncorrect,
                WordGuessResult::Win => Feedback::WordCorrect,
            },
        };

        debug!(?feedback, status = ?self.status(), "command handled");
        Ok(feedback)
    }

    /// This function creates a session and starts its first game.
    ///
    /// # Errors
    ///
    /// The function fails with [`InvalidConfig`] when no game can be started from `config`.
    pub fn new(config: GameConfig, mut selector: S) -> Result<Self, InvalidConfig> {
        let state = GameState::start(&config.words, config.max_attempts, &mut selector)?;

        info!(
            words = config.words.len(),
            max_attempts = config.max_attempts,
            "session started"
        );

        Ok(Self {
            config,
            selector,
            state,
        })
    }

    /// This function returns the closing line of a finished game, or nothing while it's running.
    #[must_use]
    pub fn outcome(&self) -> Option<String> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Lost => Some(format!("You lose! The word was '{}'.", self.state.word())),
            GameStatus::Won => Some("You win! Well done!".to_owned()),
        }
    }

    /// This function returns everything needed to draw the current game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// This function returns the game being played.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// This function returns the status of the game being played.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Feedback, Session};
    use crate::config::GameConfig;
    use crate::selector::FixedSelector;
    use crate::state::{GameStatus, InvalidConfig};

    /// Starts a session over `words` that always picks the first one.
    fn session(words: &[&str]) -> Result<Session<FixedSelector>, InvalidConfig> {
        let config = GameConfig {
            words: words.iter().map(|&word| word.to_owned()).collect(),
            ..GameConfig::default()
        };

        Session::new(config, FixedSelector(0))
    }

    /// Builds a letter guess.
    fn letter(input: &str) -> Command {
        Command::GuessLetter(input.to_owned())
    }

    /// Builds a whole-word guess.
    fn word(input: &str) -> Command {
        Command::GuessWord(input.to_owned())
    }

    #[test]
    fn empty_word_list_is_fatal() {
        assert_eq!(
            session(&[]).map(|_| ()),
            Err(InvalidConfig::EmptyWordList),
            "no session without words"
        );
    }

    #[test]
    fn letter_feedback() -> Result<(), InvalidConfig> {
        let mut session = session(&["joy"])?;

        assert_eq!(
            session.handle(letter("J"))?,
            Feedback::Correct("j".to_owned()),
            "hit"
        );
        assert_eq!(
            session.handle(letter("x"))?,
            Feedback::Incorrect("x".to_owned()),
            "miss"
        );
        assert_eq!(session.handle(letter("x"))?, Feedback::Invalid, "repeat");
        assert_eq!(session.handle(letter("xy"))?, Feedback::Invalid, "too long");
        assert_eq!(session.snapshot().incorrect, 1, "only one miss counted");
        Ok(())
    }

    #[test]
    fn messages_match_the_game() {
        assert_eq!(Feedback::Correct("o".to_owned()).to_string(), "Good guess: o", "hit");
        assert_eq!(Feedback::Incorrect("z".to_owned()).to_string(), "Wrong guess: z", "miss");
        assert_eq!(Feedback::Invalid.to_string(), "Invalid guess. Try again.", "invalid");
        assert_eq!(
            Feedback::WordIncorrect.to_string(),
            "Incorrect word guess! You lose.",
            "forfeit"
        );
    }

    #[test]
    fn winning_locks_out_guesses() -> Result<(), InvalidConfig> {
        let mut session = session(&["joy"])?;

        assert_eq!(session.handle(word("joy"))?, Feedback::WordCorrect, "right word");
        assert_eq!(session.status(), GameStatus::Won, "won");
        assert_eq!(session.outcome().as_deref(), Some("You win! Well done!"), "result");

        let before = session.snapshot();
        assert_eq!(session.handle(letter("q"))?, Feedback::Locked, "letter refused");
        assert_eq!(session.handle(word("toy"))?, Feedback::Locked, "word refused");
        assert_eq!(session.snapshot(), before, "nothing changed");
        Ok(())
    }

    #[test]
    fn losing_reveals_the_word() -> Result<(), InvalidConfig> {
        let mut session = session(&["joy"])?;

        assert_eq!(session.outcome(), None, "no result while playing");
        assert_eq!(session.handle(word("toy"))?, Feedback::WordIncorrect, "wrong word");
        assert_eq!(
            session.outcome().as_deref(),
            Some("You lose! The word was 'joy'."),
            "result names the word"
        );
        assert_eq!(session.handle(letter("j"))?, Feedback::Locked, "locked after losing");
        Ok(())
    }

    #[test]
    fn restart_starts_over() -> Result<(), InvalidConfig> {
        let mut session = session(&["joy"])?;
        let _ = session.handle(letter("a"))?;
        let _ = session.handle(word("toy"))?;

        assert_eq!(session.handle(Command::Restart)?, Feedback::Welcome, "welcome back");
        assert_eq!(session.status(), GameStatus::InProgress, "playing again");
        assert_eq!(session.snapshot().incorrect, 0, "counter reset");
        assert!(session.snapshot().guessed.is_empty(), "guesses forgotten");
        assert_eq!(
            session.handle(letter("a"))?,
            Feedback::Incorrect("a".to_owned()),
            "letters can be tried again"
        );
        Ok(())
    }
}
