//! The library components of the game. They allow setting up a game of hangman, taking guesses
//! from the player, and drawing the gallows as the wrong guesses pile up.
//!
//! The rules live in [`GameState`], which knows nothing about terminals; [`Session`] drives it on
//! behalf of the player. The starting point of the binary is the `init()` function in game.rs,
//! which contains the main game loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate isn't published anywhere yet, so it has no repository to point to."
)]

mod art;
mod config;
mod game;
mod input;
mod logging;
mod render;
mod selector;
mod session;
mod state;

pub use art::{frame, frame_index};
pub use config::{GameConfig, DEFAULT_WORDS};
pub use game::init;
pub use selector::{FixedSelector, RandomSelector, WordSelector};
pub use session::{Command, Feedback, Session};
pub use state::{
    GameState, GameStatus, GuessResult, InvalidConfig, Snapshot, WordGuessResult,
    DEFAULT_MAX_ATTEMPTS, PLACEHOLDER,
};
