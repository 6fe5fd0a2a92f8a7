//! # hangman
//!
//! This crate is the classic game of hangman, played in the terminal. A secret word is picked from
//! a small list, and you reveal it by guessing one letter at a time. Every wrong letter adds a part
//! to the figure on the gallows, and six of them lose the game.
//!
//! You can also try the whole word at once. Get it right and you win on the spot; get it wrong and
//! the game is over, no matter how many attempts you had left.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]
#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate isn't published anywhere yet, so it has no repository to point to."
)]

use anyhow::Result;
use hangman::init;

fn main() -> Result<()> {
    init()
}
