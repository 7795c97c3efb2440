//! Core game types
//!
//! The wheel, the puzzle, and the players. Nothing in here performs I/O; the game
//! controller drives these types and applies their results.

mod letter;
mod player;
mod puzzle;
mod wheel;

pub use letter::{Letter, LetterError, VOWELS};
pub use player::{IdentityGenerator, Player, PlayerError, PlayerId};
pub use puzzle::{PLACEHOLDER, Puzzle};
pub use wheel::{BANKRUPT, LOSE_A_TURN, PRIZE_TABLE, SpinOutcome, Spinner, Wheel};
