//! This module contains the illustrations of the gallows, one for every stage of the game, and the
//! mapping from the number of incorrect guesses to the stage to show.

/// The number of lines every frame is made of.
const FRAME_HEIGHT: usize = 7;

/// The frames, from the empty gallows up to the complete figure.
const FRAMES: [[&str; FRAME_HEIGHT]; 7] = [
    [
        "  +---+",
        "  |   |",
        "      |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "      |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        "  |   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|   |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        "      |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " /    |",
        "      |",
        "=========",
    ],
    [
        "  +---+",
        "  |   |",
        "  O   |",
        " /|\\  |",
        " / \\  |",
        "      |",
        "=========",
    ],
];

/// This function returns the index of the frame to draw after `incorrect` wrong guesses out of
/// `max_attempts` allowed ones.
///
/// With the usual six attempts every wrong guess adds one body part. Other limits are spread over
/// the same frames, and running out of attempts always shows the last one.
#[must_use]
pub fn frame_index(incorrect: u8, max_attempts: u8) -> usize {
    let last = FRAMES.len() - 1;

    if max_attempts == 0 {
        return last;
    }

    let capped = usize::from(incorrect.min(max_attempts));
    capped * last / usize::from(max_attempts)
}

/// This function returns the lines of the frame at `index`; anything past the end gets the last
/// frame.
#[must_use]
pub fn frame(index: usize) -> &'static [&'static str] {
    FRAMES
        .get(index.min(FRAMES.len() - 1))
        .map(<[&str; 7]>::as_slice)
        .unwrap_or_default()
}
