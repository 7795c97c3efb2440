//! Game errors and rejected input

use crate::core::{LetterError, PlayerError};
use crate::phrases::SupplyError;
use std::io;
use thiserror::Error;

/// Failure that ends a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error("phrase supply failed: {0}")]
    Supply(#[from] SupplyError),
    #[error("{rounds} rounds need {rounds} phrases but only {available} are available")]
    NotEnoughPhrases { rounds: usize, available: usize },
    #[error("interaction failed: {0}")]
    Interaction(#[from] io::Error),
}

/// Input the controller refused; the player is asked again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("please enter a number from {min} to {max}")]
    PlayerCount { min: usize, max: usize },
    #[error("{0}")]
    NotALetter(#[from] LetterError),
    #[error("'{0}' has already been guessed this round")]
    AlreadyGuessed(char),
    #[error("{0}")]
    CannotAffordVowel(#[from] PlayerError),
    #[error("please choose one of the listed options")]
    InvalidChoice,
    #[error("please type the whole phrase")]
    EmptySolve,
}
