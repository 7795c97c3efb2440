//! Hidden-phrase puzzle
//!
//! A `Puzzle` wraps one round's phrase together with the set of letters revealed so
//! far. Only ASCII alphabetic characters are ever hidden. Spaces, digits, and
//! punctuation are always shown.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// Glyph drawn in place of each unrevealed letter
pub const PLACEHOLDER: char = '_';

/// A phrase with a reveal mask
#[derive(Debug, Clone)]
pub struct Puzzle {
    phrase: String,
    category: Option<String>,
    revealed: FxHashSet<Letter>,
    solved_outright: bool,
}

impl Puzzle {
    /// Create a puzzle with nothing revealed
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{Letter, Puzzle};
    ///
    /// let mut puzzle = Puzzle::new("A bb");
    /// assert_eq!(puzzle.display(), "_ __");
    ///
    /// assert_eq!(puzzle.guess_letter(Letter::new('b').unwrap()), 2);
    /// assert_eq!(puzzle.display(), "_ bb");
    /// ```
    #[must_use]
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into().trim().to_string(),
            category: None,
            revealed: FxHashSet::default(),
            solved_outright: false,
        }
    }

    /// Create a puzzle tagged with the category it was drawn from
    #[must_use]
    pub fn with_category(phrase: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::new(phrase)
        }
    }

    /// The phrase in its original case
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Reveal a letter and count how many times it appears in the phrase
    ///
    /// Every occurrence counts, so a repeated letter scores once per appearance.
    /// The letter is marked revealed even if it does not appear. Whether a guess
    /// has already been paid for is the caller's concern.
    pub fn guess_letter(&mut self, letter: Letter) -> usize {
        self.revealed.insert(letter);
        self.phrase.chars().filter(|&ch| letter.matches(ch)).count()
    }

    /// Try to solve the whole phrase at once
    ///
    /// The candidate must match the phrase exactly, ignoring case. A wrong answer
    /// leaves the puzzle untouched.
    pub fn solve_attempt(&mut self, candidate: &str) -> bool {
        if !candidate.eq_ignore_ascii_case(&self.phrase) {
            return false;
        }

        self.solved_outright = true;
        for ch in self.phrase.chars() {
            if let Ok(letter) = Letter::new(ch) {
                self.revealed.insert(letter);
            }
        }
        true
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_outright || self.hidden_count() == 0
    }

    #[inline]
    #[must_use]
    pub fn is_revealed(&self, letter: Letter) -> bool {
        self.revealed.contains(&letter)
    }

    /// Whether the phrase holds `letter` somewhere it is still hidden
    #[must_use]
    pub fn contains_unrevealed(&self, letter: Letter) -> bool {
        !self.is_revealed(letter) && self.phrase.chars().any(|ch| letter.matches(ch))
    }

    /// Number of alphabetic characters still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.phrase
            .chars()
            .filter(|&ch| Letter::new(ch).is_ok_and(|l| !self.revealed.contains(&l)))
            .count()
    }

    /// Share of the phrase's letters already revealed, from 0.0 to 1.0
    #[must_use]
    pub fn revealed_ratio(&self) -> f64 {
        let total = self
            .phrase
            .chars()
            .filter(char::is_ascii_alphabetic)
            .count();
        if total == 0 {
            return 1.0;
        }
        (total - self.hidden_count()) as f64 / total as f64
    }

    /// Render the phrase with unrevealed letters replaced by [`PLACEHOLDER`]
    ///
    /// The result always has the same number of characters as the phrase.
    #[must_use]
    pub fn display(&self) -> String {
        self.phrase
            .chars()
            .map(|ch| match Letter::new(ch) {
                Ok(letter) if !self.revealed.contains(&letter) => PLACEHOLDER,
                _ => ch,
            })
            .collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn letter_scoring_counts_every_occurrence() {
        let mut puzzle = Puzzle::new("A BB");
        assert_eq!(puzzle.guess_letter(letter('a')), 1);
        assert_eq!(puzzle.guess_letter(letter('z')), 0);
        assert_eq!(puzzle.guess_letter(letter('b')), 2);
        assert!(puzzle.is_solved());
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut puzzle = Puzzle::new("Banana Bread");
        assert_eq!(puzzle.guess_letter(letter('b')), 2);
        assert_eq!(puzzle.guess_letter(letter('A')), 4);
        assert_eq!(puzzle.display(), "Ba_a_a B__a_");
    }

    #[test]
    fn absent_letter_is_still_marked_revealed() {
        let mut puzzle = Puzzle::new("DOG");
        assert_eq!(puzzle.guess_letter(letter('x')), 0);
        assert!(puzzle.is_revealed(letter('x')));
        assert_eq!(puzzle.display(), "___");
    }

    #[test]
    fn raw_reguess_recounts() {
        // The puzzle itself does not refuse repeats; the controller gates them
        let mut puzzle = Puzzle::new("A BB");
        assert_eq!(puzzle.guess_letter(letter('b')), 2);
        assert_eq!(puzzle.guess_letter(letter('b')), 2);
    }

    #[test]
    fn display_passes_through_non_letters() {
        let mut puzzle = Puzzle::new("Drive-In Movie, 1957!");
        assert_eq!(puzzle.display(), "_____-__ _____, 1957!");

        puzzle.guess_letter(letter('i'));
        assert_eq!(puzzle.display(), "__i__-I_ ___i_, 1957!");
    }

    #[test]
    fn display_length_matches_phrase() {
        let mut puzzle = Puzzle::new("Fish and Chips");
        let expected = puzzle.phrase().chars().count();

        for ch in ['s', 'q', 'h', 'a', 'i'] {
            puzzle.guess_letter(letter(ch));
            assert_eq!(puzzle.display().chars().count(), expected);
        }
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut puzzle = Puzzle::new("Key Lime Pie");
        let mut hidden = puzzle.hidden_count();

        for ch in ['e', 'z', 'i', 'k', 'y', 'l', 'm', 'p'] {
            puzzle.guess_letter(letter(ch));
            let now = puzzle.hidden_count();
            assert!(now <= hidden);
            hidden = now;
        }

        assert_eq!(hidden, 0);
        assert!(puzzle.is_solved());
        puzzle.guess_letter(letter('q'));
        assert!(puzzle.is_solved());
    }

    #[test]
    fn solve_attempt_exact_match() {
        let mut puzzle = Puzzle::new("DOG");
        assert!(puzzle.solve_attempt("DOG"));
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.display(), "DOG");
    }

    #[test]
    fn failed_solve_changes_nothing() {
        let mut puzzle = Puzzle::new("DOG");
        puzzle.guess_letter(letter('o'));
        let before = puzzle.display();

        assert!(!puzzle.solve_attempt("AAAA"));
        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.display(), before);
        assert_eq!(puzzle.hidden_count(), 2);
    }

    #[test]
    fn solve_ignores_case_but_not_spacing() {
        let mut puzzle = Puzzle::new("Corn on the Cob");
        assert!(!puzzle.solve_attempt("corn on the  cob"));
        assert!(puzzle.solve_attempt("CORN ON THE COB"));
        assert_eq!(puzzle.display(), "Corn on the Cob");
    }

    #[test]
    fn contains_unrevealed_tracks_progress() {
        let mut puzzle = Puzzle::new("Art Museum");
        assert!(puzzle.contains_unrevealed(letter('m')));
        puzzle.guess_letter(letter('m'));
        assert!(!puzzle.contains_unrevealed(letter('m')));
        assert!(!puzzle.contains_unrevealed(letter('z')));
    }

    #[test]
    fn revealed_ratio() {
        let mut puzzle = Puzzle::new("AB CD");
        assert!((puzzle.revealed_ratio() - 0.0).abs() < f64::EPSILON);
        puzzle.guess_letter(letter('a'));
        puzzle.guess_letter(letter('c'));
        assert!((puzzle.revealed_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn category_is_kept() {
        let puzzle = Puzzle::with_category("Niagara Falls", "PLACES");
        assert_eq!(puzzle.category(), Some("PLACES"));
        assert_eq!(Puzzle::new("x").category(), None);
    }
}
