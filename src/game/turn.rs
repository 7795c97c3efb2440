//! Turn state machine
//!
//! A turn is a loop over [`TurnState`]. Each step of the turn yields a
//! [`TurnOutcome`], and [`TurnState::resolve`] maps it to the next state:
//!
//! ```text
//! AwaitingSpin --Cash--> Guessing --Matched--> Choosing --SpinAgain--> AwaitingSpin
//!      |                    |                     |
//!      |                    |                     +--Solve--> Solving
//!      |                    +--NoMatch--> TurnEnded
//!      |                    +--Solved---> RoundSolved
//!      +--Bankrupt/SkipTurn--> TurnEnded
//!
//! Solving --Solved--> RoundSolved
//!         --NoMatch-> TurnEnded
//! ```

use crate::core::SpinOutcome;
use std::fmt;
use std::str::FromStr;

/// Where a player's turn currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSpin,
    /// Spun cash; waiting for a letter worth `cash` per occurrence
    Guessing { cash: u32 },
    /// Guessed correctly; choosing between spinning again and solving
    Choosing,
    Solving,
    TurnEnded,
    RoundSolved,
}

/// Result of one step of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Bankrupt,
    SkipTurn,
    /// A letter appeared this many times and the puzzle is not yet solved
    Matched(usize),
    /// A letter was absent, or a solve attempt was wrong
    NoMatch,
    Solved,
}

impl TurnState {
    /// Next state after a step produced `outcome`
    #[must_use]
    pub const fn resolve(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Bankrupt | TurnOutcome::SkipTurn | TurnOutcome::NoMatch => Self::TurnEnded,
            TurnOutcome::Matched(_) => Self::Choosing,
            TurnOutcome::Solved => Self::RoundSolved,
        }
    }

    /// Next state after the wheel stops
    #[must_use]
    pub const fn after_spin(spin: SpinOutcome) -> Self {
        match spin {
            SpinOutcome::Cash(cash) => Self::Guessing { cash },
            SpinOutcome::Bankrupt => Self::resolve(TurnOutcome::Bankrupt),
            SpinOutcome::SkipTurn => Self::resolve(TurnOutcome::SkipTurn),
        }
    }

    /// Next state after a follow-up choice
    #[must_use]
    pub const fn after_choice(choice: FollowUp) -> Self {
        match choice {
            FollowUp::SpinAgain => Self::AwaitingSpin,
            FollowUp::Solve => Self::Solving,
        }
    }

    /// Whether the turn is over
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::TurnEnded | Self::RoundSolved)
    }
}

/// Choice offered after a correct letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    SpinAgain,
    Solve,
}

impl FollowUp {
    pub const ALL: [Self; 2] = [Self::SpinAgain, Self::Solve];
}

impl fmt::Display for FollowUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpinAgain => write!(f, "Spin again"),
            Self::Solve => write!(f, "Solve the puzzle"),
        }
    }
}

impl FromStr for FollowUp {
    type Err = ();

    /// Accepts the option number or a keyword
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "s" | "spin" | "spin again" => Ok(Self::SpinAgain),
            "2" | "v" | "solve" => Ok(Self::Solve),
            _ => Err(()),
        }
    }
}

/// How a whole turn finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Play passes to the next player
    Ended,
    /// The current player solved the puzzle
    Solved,
}
