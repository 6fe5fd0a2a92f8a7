//! This module draws the game on the terminal: the word, the last message, the gallows and the
//! guesses so far.

use anyhow::Result;
use console::{style, Term};

use crate::art::frame;
use crate::session::Feedback;
use crate::state::{GameStatus, Snapshot};

/// This trait represents anything the game can be drawn to after every change.
pub(crate) trait Renderer {
    /// This function draws the given snapshot, together with the feedback for the last command and
    /// the closing line if the game is over.
    fn render(
        &mut self,
        snapshot: &Snapshot,
        feedback: &Feedback,
        outcome: Option<&str>,
    ) -> Result<()>;
}

/// This struct holds the renderer that redraws the whole screen through `console`.
pub(crate) struct ConsoleRenderer<'term> {
    /// This field contains the terminal to draw to.
    term: &'term Term,
}

impl<'term> ConsoleRenderer<'term> {
    /// This function creates a renderer drawing to `term`.
    pub(crate) const fn new(term: &'term Term) -> Self {
        Self { term }
    }
}

impl Renderer for ConsoleRenderer<'_> {
    fn render(
        &mut self,
        snapshot: &Snapshot,
        feedback: &Feedback,
        outcome: Option<&str>,
    ) -> Result<()> {
        self.term.clear_screen()?;

        for line in compose(snapshot, feedback, outcome) {
            self.term.write_line(&line)?;
        }

        Ok(())
    }
}

/// This function lays out the screen, one string per line.
pub(crate) fn compose(
    snapshot: &Snapshot,
    feedback: &Feedback,
    outcome: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![
        style("HANGMAN").bold().to_string(),
        String::new(),
        style(spaced(&snapshot.revealed)).bold().to_string(),
        String::new(),
        paint(feedback),
        String::new(),
    ];

    lines.extend(frame(snapshot.frame).iter().map(|&line| line.to_owned()));
    lines.push(String::new());

    let guessed = if snapshot.guessed.is_empty() {
        "none".to_owned()
    } else {
        snapshot
            .guessed
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("Guessed letters: {guessed}"));
    lines.push(format!(
        "Incorrect guesses: {}/{}",
        snapshot.incorrect, snapshot.max_attempts
    ));

    if let Some(outcome) = outcome {
        lines.push(String::new());
        let outcome = match snapshot.status {
            GameStatus::Won => style(outcome).green().bold(),
            GameStatus::InProgress | GameStatus::Lost => style(outcome).red().bold(),
        };
        lines.push(outcome.to_string());
    }

    lines
}

/// This function colors the feedback message: green for good news, red for bad news.
fn paint(feedback: &Feedback) -> String {
    let message = style(feedback.to_string());

    let message = match *feedback {
        Feedback::Correct(_) | Feedback::WordCorrect => message.green(),
        Feedback::Incorrect(_) | Feedback::WordIncorrect => message.red(),
        Feedback::Invalid | Feedback::Locked => message.yellow(),
        Feedback::Welcome => message,
    };

    message.to_string()
}

/// This function puts a space between the letters of the word so the placeholders can be counted.
fn spaced(revealed: &str) -> String {
    revealed
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
