//! Game settings

/// Rounds in a standard game
pub const DEFAULT_ROUNDS: usize = 3;

/// Price of a vowel, paid from round money
pub const DEFAULT_VOWEL_COST: u32 = 250;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 3;

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rounds: usize,
    pub vowel_cost: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(rounds: usize, vowel_cost: u32) -> Self {
        Self { rounds, vowel_cost }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS, DEFAULT_VOWEL_COST)
    }
}
