pub mod game;
pub mod renderer;
pub mod words;

pub use game::{Buzz, RoundConfig, RoundEngine, RoundView};
pub use words::{default_vocabulary, WordDeck};

use crate::games::GameInfo;

pub const INFO: GameInfo = GameInfo {
    id: "guessword",
    name: "Guess the Word",
    description: "Skip or confirm words against the countdown",
    author: "Wordterm Team",
};
