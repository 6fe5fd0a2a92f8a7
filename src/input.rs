//! This module contains everything related to taking input from the player. The terminal version
//! uses the `dialoguer` crate for both the menu of actions and the text prompts.
//!
//! No validation happens here on purpose: whatever is typed goes to the game, which knows how to
//! turn away a bad guess without costing an attempt.

use anyhow::{anyhow, Result};
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::session::Command;

/// This enum holds the entries of the menu shown before every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// This variant is used to submit a single letter.
    GuessLetter,
    /// This variant is used to submit the whole word.
    GuessWord,
    /// This variant is used to leave the game.
    Quit,
    /// This variant is used to start a new game.
    Restart,
}

impl Action {
    /// This function returns the entries to offer. Once the game is over, only restarting or
    /// leaving are left.
    pub(crate) const fn available(game_over: bool) -> &'static [Self] {
        if game_over {
            &[Self::Restart, Self::Quit]
        } else {
            &[Self::GuessLetter, Self::GuessWord, Self::Restart, Self::Quit]
        }
    }

    /// This function returns the label of the entry in the menu.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::GuessLetter => "Guess a letter",
            Self::GuessWord => "Guess the whole word",
            Self::Quit => "Quit",
            Self::Restart => "Restart",
        }
    }
}

/// This trait represents a source of commands for the session. `None` means the player is done.
pub(crate) trait Prompter {
    /// This function waits for the player's next command.
    fn next_command(&mut self, game_over: bool) -> Result<Option<Command>>;
}

/// This struct holds the prompter that asks the player through the terminal.
pub(crate) struct TermPrompter<'term> {
    /// This field contains the terminal the menu and prompts are drawn on.
    term: &'term Term,
    /// This field contains the theme shared by the menu and the prompts.
    theme: ColorfulTheme,
}

impl<'term> TermPrompter<'term> {
    /// This function creates a prompter reading from `term`.
    pub(crate) fn new(term: &'term Term) -> Self {
        Self {
            term,
            theme: ColorfulTheme::default(),
        }
    }

    /// This function asks for a line of text; empty answers are let through.
    fn take_text(&self, prompt: &str) -> Result<String> {
        let input: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{}", style(prompt).bold()))
            .allow_empty(true)
            .interact_text_on(self.term)?;

        Ok(input)
    }
}

impl Prompter for TermPrompter<'_> {
    fn next_command(&mut self, game_over: bool) -> Result<Option<Command>> {
        let actions = Action::available(game_over);
        let labels: Vec<&str> = actions.iter().map(|action| action.repr()).collect();

        let choice = Select::with_theme(&self.theme)
            .with_prompt(format!("{}", style("What next?").bold()))
            .items(labels.as_slice())
            .default(0)
            .interact_on(self.term)?;

        let action = actions
            .get(choice)
            .copied()
            .ok_or_else(|| anyhow!("no menu entry at position {choice}"))?;

        let command = match action {
            Action::GuessLetter => Some(Command::GuessLetter(self.take_text("Enter a letter")?)),
            Action::GuessWord => Some(Command::GuessWord(
                self.take_text("Guess the whole word")?,
            )),
            Action::Quit => None,
            Action::Restart => Some(Command::Restart),
        };

        Ok(command)
    }
}
