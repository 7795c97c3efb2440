//! Wheel of Fortune
//!
//! A turn-based phrase-guessing game for one to three players: spin the wheel, call
//! letters, buy vowels and solve the puzzle over a fixed number of rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use wheel_of_fortune::core::{Letter, Puzzle};
//!
//! let mut puzzle = Puzzle::new("Rubber Duck");
//! assert_eq!(puzzle.guess_letter(Letter::new('b').unwrap()), 2);
//! assert_eq!(puzzle.display(), "__bb__ ____");
//!
//! assert!(puzzle.solve_attempt("rubber duck"));
//! assert!(puzzle.is_solved());
//! ```

// Core domain types
pub mod core;

// Game controller and turn state machine
pub mod game;

// Phrase corpus
pub mod phrases;

// Computer players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
