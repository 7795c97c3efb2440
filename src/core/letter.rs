//! Validated letter guesses
//!
//! A `Letter` is a single ASCII alphabetic character stored in uppercase, so every
//! comparison against a phrase is case-insensitive by construction.

use std::fmt;
use thiserror::Error;

/// The five letters that must be purchased instead of earned
pub const VOWELS: [Letter; 5] = [
    Letter(b'A'),
    Letter(b'E'),
    Letter(b'I'),
    Letter(b'O'),
    Letter(b'U'),
];

/// A single guessable letter (uppercase ASCII)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for input that is not a single letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("expected a single letter, got nothing")]
    Empty,
    #[error("expected a single letter, got {0} characters")]
    TooLong(usize),
    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),
}

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    ///
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Parse user input that should contain exactly one letter
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `LetterError` if the trimmed input is empty, longer than one
    /// character, or not alphabetic.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.trim().chars();
        let first = chars.next().ok_or(LetterError::Empty)?;

        let extra = chars.count();
        if extra > 0 {
            return Err(LetterError::TooLong(extra + 1));
        }

        Self::new(first)
    }

    /// The letter as an uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'A' | b'E' | b'I' | b'O' | b'U')
    }

    /// Check whether a phrase character is this letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn matches(self, ch: char) -> bool {
        ch.is_ascii() && ch.to_ascii_uppercase() as u8 == self.0
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
