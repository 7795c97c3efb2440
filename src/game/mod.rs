//! Turn and round orchestration
//!
//! The controller drives the wheel, puzzle and players through rounds and turns,
//! talking to the outside world only through the [`Interaction`] trait.

mod config;
mod controller;
mod error;
mod round;
mod session;
mod summary;
mod surface;
mod turn;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{DEFAULT_ROUNDS, DEFAULT_VOWEL_COST, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use controller::Game;
pub use error::{GameError, InputRejection};
pub use round::Round;
pub use session::run_sessions;
pub use summary::{GameSummary, RoundSummary, game_winner};
pub use surface::{GameEvent, Interaction, TurnView, wants_rematch};
pub use turn::{FollowUp, TurnOutcome, TurnResult, TurnState};
