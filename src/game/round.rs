//! Per-round state

use crate::core::{Letter, Player, Puzzle};
use rustc_hash::FxHashSet;

/// One round: a puzzle plus the letters called against it
///
/// The guessed-letter set is the only gate against re-guessing; a fresh `Round` is
/// created for every puzzle, so it starts empty each round.
#[derive(Debug)]
pub struct Round {
    number: usize,
    puzzle: Puzzle,
    guessed: FxHashSet<Letter>,
    purchased_vowels: Vec<Letter>,
    turns: usize,
    bankruptcies: usize,
}

impl Round {
    #[must_use]
    pub fn new(number: usize, puzzle: Puzzle) -> Self {
        Self {
            number,
            puzzle,
            guessed: FxHashSet::default(),
            purchased_vowels: Vec::new(),
            turns: 0,
            bankruptcies: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub(crate) const fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Letters called this round, alphabetically
    #[must_use]
    pub fn guessed(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Vowels bought this round, in purchase order
    #[must_use]
    pub fn purchased_vowels(&self) -> &[Letter] {
        &self.purchased_vowels
    }

    #[inline]
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    #[inline]
    #[must_use]
    pub const fn bankruptcies(&self) -> usize {
        self.bankruptcies
    }

    /// Letters `player` may still call: any unguessed consonant, plus unguessed
    /// vowels when the player can pay `vowel_cost`
    #[must_use]
    pub fn playable_letters(&self, player: &Player, vowel_cost: u32) -> Vec<Letter> {
        let can_buy = player.can_afford_vowel(vowel_cost);
        Letter::alphabet()
            .filter(|&l| !self.is_guessed(l) && (!l.is_vowel() || can_buy))
            .collect()
    }

    pub(crate) fn record_guess(&mut self, letter: Letter) {
        self.guessed.insert(letter);
        if letter.is_vowel() {
            self.purchased_vowels.push(letter);
        }
    }

    pub(crate) const fn begin_turn(&mut self) {
        self.turns += 1;
    }

    pub(crate) const fn record_bankruptcy(&mut self) {
        self.bankruptcies += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdentityGenerator;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn new_round_has_nothing_guessed() {
        let round = Round::new(2, Puzzle::new("Grand Canyon"));
        assert_eq!(round.number(), 2);
        assert!(round.guessed().is_empty());
        assert!(round.purchased_vowels().is_empty());
        assert_eq!(round.turns(), 0);
    }

    #[test]
    fn guesses_are_sorted_and_vowels_tracked() {
        let mut round = Round::new(1, Puzzle::new("Grand Canyon"));
        round.record_guess(letter('n'));
        round.record_guess(letter('a'));
        round.record_guess(letter('c'));

        assert_eq!(round.guessed(), [letter('a'), letter('c'), letter('n')]);
        assert_eq!(round.purchased_vowels(), [letter('a')]);
        assert!(round.is_guessed(letter('N')));
        assert!(!round.is_guessed(letter('g')));
    }

    #[test]
    fn vowels_playable_only_when_affordable() {
        let mut ids = IdentityGenerator::new();
        let mut player = Player::new(ids.next_id(), "Pat");
        let round = Round::new(1, Puzzle::new("Tour Guide"));

        let playable = round.playable_letters(&player, 250);
        assert_eq!(playable.len(), 21);
        assert!(playable.iter().all(|l| !l.is_vowel()));

        player.apply_letter_result(1, 300);
        assert_eq!(round.playable_letters(&player, 250).len(), 26);
    }

    #[test]
    fn guessed_letters_are_not_playable() {
        let mut ids = IdentityGenerator::new();
        let player = Player::new(ids.next_id(), "Pat");
        let mut round = Round::new(1, Puzzle::new("Tour Guide"));
        round.record_guess(letter('t'));

        let playable = round.playable_letters(&player, 250);
        assert!(!playable.contains(&letter('t')));
        assert_eq!(playable.len(), 20);
    }
}
