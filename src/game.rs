//! The game module wires the parts together. It contains the `init()` function that parses the
//! command line, sets up logging and the terminal, and then runs the game loop until the player
//! quits.

use anyhow::Result;
use clap::Parser as _;
use console::Term;
use tracing::{error, info};

use crate::config::Cli;
use crate::input::{Prompter, TermPrompter};
use crate::logging::init_logging;
use crate::render::{ConsoleRenderer, Renderer};
use crate::selector::{RandomSelector, WordSelector};
use crate::session::{Feedback, Session};

/// Initializes the game and handles everything until the player quits. This is a `main()` function
/// of sorts though it is still called from main.rs.
///
/// The configuration is checked before anything is drawn, so a bad word list is reported on a
/// clean terminal.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `hangman::InvalidConfig`
/// - `io::Error`
/// - `dialoguer::Error`
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = cli.into_config();
    let selector = config
        .seed
        .map_or_else(RandomSelector::new, RandomSelector::with_seed);

    let mut session = Session::new(config, selector).inspect_err(|err| {
        error!(%err, "cannot start a game");
    })?;

    let term = Term::stdout();
    init_message(&term)?;

    let mut renderer = ConsoleRenderer::new(&term);
    let mut prompter = TermPrompter::new(&term);
    play(&mut session, &mut renderer, &mut prompter)?;

    term.clear_screen()?;
    term.show_cursor()?;
    info!("player quit");

    Ok(())
}

/// This function prepares the terminal: the screen is cleared and the title of the console window
/// is set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    term.clear_screen()?;
    term.set_title("hangman");

    Ok(())
}

/// This function runs the game loop: draw the game, wait for a command, apply it, and so on until
/// the prompter says the player is done.
pub(crate) fn play<S, R, P>(
    session: &mut Session<S>,
    renderer: &mut R,
    prompter: &mut P,
) -> Result<()>
where
    S: WordSelector,
    R: Renderer + ?Sized,
    P: Prompter + ?Sized,
{
    let mut feedback = Feedback::Welcome;

    loop {
        let outcome = session.outcome();
        renderer.render(&session.snapshot(), &feedback, outcome.as_deref())?;

        let Some(command) = prompter.next_command(session.status().is_terminal())? else {
            break Ok(());
        };

        feedback = session.handle(command)?;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::Result;

    use super::play;
    use crate::config::GameConfig;
    use crate::input::Prompter;
    use crate::render::Renderer;
    use crate::selector::FixedSelector;
    use crate::session::{Command, Feedback, Session};
    use crate::state::{GameStatus, Snapshot};

    /// A renderer that keeps every frame it is asked to draw.
    #[derive(Default)]
    struct Recorder {
        /// The frames drawn so far.
        frames: Vec<(Snapshot, Feedback, Option<String>)>,
    }

    impl Renderer for Recorder {
        fn render(
            &mut self,
            snapshot: &Snapshot,
            feedback: &Feedback,
            outcome: Option<&str>,
        ) -> Result<()> {
            self.frames
                .push((snapshot.clone(), feedback.clone(), outcome.map(str::to_owned)));
            Ok(())
        }
    }

    /// A prompter that plays back a fixed list of commands, then quits.
    struct Script {
        /// The commands left to play.
        commands: VecDeque<Command>,
        /// Whether the game was reported over at each prompt.
        game_over: Vec<bool>,
    }

    impl Script {
        /// Creates a script that plays `commands` in order.
        fn new(commands: Vec<Command>) -> Self {
            Self {
                commands: commands.into(),
                game_over: Vec::new(),
            }
        }
    }

    impl Prompter for Script {
        fn next_command(&mut self, game_over: bool) -> Result<Option<Command>> {
            self.game_over.push(game_over);
            Ok(self.commands.pop_front())
        }
    }

    /// Starts a session whose only word is `word`.
    fn session(word: &str) -> Result<Session<FixedSelector>> {
        let config = GameConfig {
            words: vec![word.to_owned()],
            ..GameConfig::default()
        };

        Ok(Session::new(config, FixedSelector(0))?)
    }

    #[test]
    fn plays_a_winning_game() -> Result<()> {
        let mut session = session("joy")?;
        let mut recorder = Recorder::default();
        let mut script = Script::new(vec![
            Command::GuessLetter("j".to_owned()),
            Command::GuessLetter("x".to_owned()),
            Command::GuessWord("joy".to_owned()),
        ]);

        play(&mut session, &mut recorder, &mut script)?;

        let feedback: Vec<&Feedback> = recorder.frames.iter().map(|frame| &frame.1).collect();
        assert_eq!(
            feedback,
            [
                &Feedback::Welcome,
                &Feedback::Correct("j".to_owned()),
                &Feedback::Incorrect("x".to_owned()),
                &Feedback::WordCorrect
            ],
            "one frame per state change"
        );

        let last = recorder.frames.last().map(|frame| &frame.0);
        assert_eq!(last.map(|snapshot| snapshot.status), Some(GameStatus::Won), "won");
        assert_eq!(last.map(|snapshot| snapshot.incorrect), Some(1), "one miss");
        assert_eq!(
            script.game_over,
            [false, false, false, true],
            "input is locked once the game is over"
        );
        Ok(())
    }

    #[test]
    fn outcome_is_drawn_after_a_forfeit() -> Result<()> {
        let mut session = session("joy")?;
        let mut recorder = Recorder::default();
        let mut script = Script::new(vec![Command::GuessWord("toy".to_owned()), Command::Restart]);

        play(&mut session, &mut recorder, &mut script)?;

        let outcomes: Vec<Option<&str>> = recorder
            .frames
            .iter()
            .map(|frame| frame.2.as_deref())
            .collect();
        assert_eq!(
            outcomes,
            [None, Some("You lose! The word was 'joy'."), None],
            "outcome only while the game is over"
        );
        assert_eq!(session.status(), GameStatus::InProgress, "restarted");
        Ok(())
    }
}
