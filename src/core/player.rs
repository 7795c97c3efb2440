//! Contestants and their money
//!
//! Round money is what a player has earned on the current puzzle; it is lost on a
//! bankrupt spin and cleared at the end of every round. Total money only grows, and
//! only when the player wins a round.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Stable identity of a player within one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out sequential player ids for one session
///
/// Each game owns its own generator, so ids restart at zero for every session.
#[derive(Debug, Default)]
pub struct IdentityGenerator {
    next: u32,
}

impl IdentityGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub const fn next_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

/// Error type for economy operations a player cannot perform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("a vowel costs ${cost} but only ${available} has been earned this round")]
    InsufficientFunds { cost: u32, available: u32 },
}

/// A contestant
///
/// Two players are equal when their ids match; names may repeat.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    round_money: u32,
    total_money: u32,
}

impl Player {
    /// Create a player with no money
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{IdentityGenerator, Player};
    ///
    /// let mut ids = IdentityGenerator::new();
    /// let player = Player::new(ids.next_id(), "kevin");
    /// assert_eq!(player.name(), "kevin");
    /// assert_eq!(player.round_money(), 0);
    /// assert_eq!(player.total_money(), 0);
    /// ```
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            round_money: 0,
            total_money: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn round_money(&self) -> u32 {
        self.round_money
    }

    #[inline]
    #[must_use]
    pub const fn total_money(&self) -> u32 {
        self.total_money
    }

    /// Credit a letter guess worth `cash_per_match` per occurrence
    ///
    /// Returns the amount credited (zero when nothing matched).
    pub fn apply_letter_result(&mut self, match_count: usize, cash_per_match: u32) -> u32 {
        if match_count == 0 {
            return 0;
        }

        let count = u32::try_from(match_count).unwrap_or(u32::MAX);
        let credited = count.saturating_mul(cash_per_match);
        self.round_money = self.round_money.saturating_add(credited);
        credited
    }

    pub const fn bankrupt(&mut self) {
        self.round_money = 0;
    }

    /// Bank this round's earnings
    pub const fn win_round(&mut self) {
        self.total_money = self.total_money.saturating_add(self.round_money);
    }

    pub const fn new_round(&mut self) {
        self.round_money = 0;
    }

    #[inline]
    #[must_use]
    pub const fn can_afford_vowel(&self, cost: u32) -> bool {
        self.round_money >= cost
    }

    /// Pay for a vowel out of this round's earnings
    ///
    /// # Errors
    /// Returns `PlayerError::InsufficientFunds` and leaves the balance untouched
    /// when the player cannot afford it.
    pub const fn purchase_vowel(&mut self, cost: u32) -> Result<(), PlayerError> {
        if !self.can_afford_vowel(cost) {
            return Err(PlayerError::InsufficientFunds {
                cost,
                available: self.round_money,
            });
        }
        self.round_money -= cost;
        Ok(())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
