//! Prize wheel
//!
//! The wheel is a fixed table of 24 segments. Two sentinel values carry special
//! meaning: [`BANKRUPT`] wipes the spinner's round earnings and [`LOSE_A_TURN`]
//! passes play to the next player. Every other segment is cash paid per matched letter.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Segment value that bankrupts the spinner
pub const BANKRUPT: i32 = -999;

/// Segment value that skips the spinner's turn
pub const LOSE_A_TURN: i32 = 0;

/// The wheel layout, in segment order
pub const PRIZE_TABLE: [i32; 24] = [
    2500, 600, 700, 600, 650, 500, 700, 100, 999, 100, 600, 550, 500, 600, BANKRUPT, 650, 700,
    LOSE_A_TURN, 800, 500, 650, 500, 900, BANKRUPT,
];

/// Result of a single spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinOutcome {
    /// Cash paid for each occurrence of the next correctly guessed letter
    Cash(u32),
    Bankrupt,
    SkipTurn,
}

impl SpinOutcome {
    /// Resolve a raw segment value into an outcome
    ///
    /// Sentinel values never become cash.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{SpinOutcome, BANKRUPT};
    ///
    /// assert_eq!(SpinOutcome::from_segment(650), SpinOutcome::Cash(650));
    /// assert_eq!(SpinOutcome::from_segment(BANKRUPT), SpinOutcome::Bankrupt);
    /// assert_eq!(SpinOutcome::from_segment(0), SpinOutcome::SkipTurn);
    /// ```
    #[must_use]
    pub const fn from_segment(value: i32) -> Self {
        match value {
            BANKRUPT => Self::Bankrupt,
            v if v > 0 => Self::Cash(v.unsigned_abs()),
            // Any other non-positive segment loses the turn
            _ => Self::SkipTurn,
        }
    }

    /// Cash value, if this outcome pays
    #[must_use]
    pub const fn cash(self) -> Option<u32> {
        match self {
            Self::Cash(amount) => Some(amount),
            Self::Bankrupt | Self::SkipTurn => None,
        }
    }
}

/// Something that produces spin outcomes for the game controller
pub trait Spinner {
    fn spin(&mut self) -> SpinOutcome;
}

/// The prize wheel, backed by a random number generator
///
/// Each spin picks a uniformly random segment. The wheel holds no state between
/// spins other than its RNG.
pub struct Wheel<R: Rng = ThreadRng> {
    rng: R,
}

impl Wheel {
    /// Create a wheel using the thread-local RNG
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Wheel<R> {
    /// Create a wheel from an explicit RNG (seeded wheels for tests and simulations)
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a segment index
    pub fn spin_index(&mut self) -> usize {
        self.rng.random_range(0..PRIZE_TABLE.len())
    }

    /// Pick a segment and return its raw table value
    pub fn spin_segment(&mut self) -> i32 {
        PRIZE_TABLE[self.spin_index()]
    }
}

impl<R: Rng> Spinner for Wheel<R> {
    fn spin(&mut self) -> SpinOutcome {
        SpinOutcome::from_segment(self.spin_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_wheel() -> Wheel<StdRng> {
        Wheel::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn table_has_expected_sentinels() {
        assert_eq!(PRIZE_TABLE.len(), 24);
        assert_eq!(PRIZE_TABLE.iter().filter(|&&v| v == BANKRUPT).count(), 2);
        assert_eq!(PRIZE_TABLE.iter().filter(|&&v| v == LOSE_A_TURN).count(), 1);
    }

    #[test]
    fn every_segment_is_reached() {
        let mut wheel = seeded_wheel();
        let mut seen = [false; PRIZE_TABLE.len()];

        for _ in 0..2000 {
            seen[wheel.spin_index()] = true;
        }

        assert!(seen.iter().all(|&hit| hit), "unreached segments: {seen:?}");
    }

    #[test]
    fn spins_never_expose_raw_sentinels() {
        let mut wheel = seeded_wheel();

        for _ in 0..1000 {
            match wheel.spin() {
                SpinOutcome::Cash(amount) => {
                    assert!(amount > 0);
                    assert!(PRIZE_TABLE.contains(&(amount as i32)));
                }
                SpinOutcome::Bankrupt | SpinOutcome::SkipTurn => {}
            }
        }
    }

    #[test]
    fn all_outcome_kinds_occur() {
        let mut wheel = seeded_wheel();
        let outcomes: Vec<SpinOutcome> = (0..1000).map(|_| wheel.spin()).collect();

        assert!(outcomes.contains(&SpinOutcome::Bankrupt));
        assert!(outcomes.contains(&SpinOutcome::SkipTurn));
        assert!(outcomes.contains(&SpinOutcome::Cash(2500)));
    }

    #[test]
    fn segment_mapping() {
        assert_eq!(SpinOutcome::from_segment(999), SpinOutcome::Cash(999));
        assert_eq!(SpinOutcome::from_segment(-999), SpinOutcome::Bankrupt);
        assert_eq!(SpinOutcome::from_segment(0), SpinOutcome::SkipTurn);
        assert_eq!(SpinOutcome::Cash(500).cash(), Some(500));
        assert_eq!(SpinOutcome::Bankrupt.cash(), None);
    }
}
