//! The boundary between the game controller and whoever is playing
//!
//! Surfaces return raw input; the controller validates it and asks again when it is
//! not acceptable. Rendering is event-driven: every state change the players should
//! see arrives as a [`GameEvent`].

use super::{FollowUp, InputRejection, Round};
use crate::core::{Letter, Player, Puzzle, SpinOutcome};
use std::io;

/// What a surface may look at while prompting for a turn decision
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub player: &'a Player,
    pub round: &'a Round,
    /// Cash riding on the next letter, when the wheel has just paid out
    pub spin: Option<u32>,
    pub vowel_cost: u32,
}

impl TurnView<'_> {
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        self.round.puzzle()
    }

    /// Letters the current player may call right now
    #[must_use]
    pub fn playable_letters(&self) -> Vec<Letter> {
        self.round.playable_letters(self.player, self.vowel_cost)
    }
}

/// Something that happened in the game
#[derive(Debug, Clone)]
pub enum GameEvent<'a> {
    Welcome,
    PlayersSeated { players: &'a [Player] },
    RoundStarted {
        number: usize,
        total: usize,
        puzzle: &'a Puzzle,
    },
    TurnStarted {
        player: &'a Player,
        puzzle: &'a Puzzle,
        standings: &'a [Player],
    },
    Spun {
        player: &'a Player,
        outcome: SpinOutcome,
    },
    VowelPurchased {
        player: &'a Player,
        letter: Letter,
        cost: u32,
    },
    LetterRevealed {
        player: &'a Player,
        letter: Letter,
        matches: usize,
        credited: u32,
        puzzle: &'a Puzzle,
    },
    /// Every letter is either called or unaffordable; the player must solve
    NoPlayableLetters { player: &'a Player },
    SolveAttempted {
        player: &'a Player,
        guess: &'a str,
        solved: bool,
        puzzle: &'a Puzzle,
    },
    TurnEnded {
        player: &'a Player,
        /// Only one player is seated, so the same player goes again
        solo: bool,
    },
    RoundWon {
        number: usize,
        winner: &'a Player,
        winnings: u32,
        puzzle: &'a Puzzle,
        standings: &'a [Player],
    },
    GameOver {
        winner: &'a Player,
        standings: &'a [Player],
    },
    Rejected(InputRejection),
}

/// Prompts and output for a game session
pub trait Interaction {
    /// Ask how many players are joining (1 to `max`)
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_player_count(&mut self, max: usize) -> io::Result<String>;

    /// Ask for the name of the player in `seat` (zero-based)
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_player_name(&mut self, seat: usize) -> io::Result<String>;

    /// Ask for a single letter after a cash spin
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_letter(&mut self, view: &TurnView<'_>) -> io::Result<String>;

    /// Ask what to do after a correct letter
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_follow_up(&mut self, view: &TurnView<'_>, options: &[FollowUp])
    -> io::Result<String>;

    /// Ask for the full phrase
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_solve(&mut self, view: &TurnView<'_>) -> io::Result<String>;

    /// Ask whether to start another game once this one is over
    ///
    /// # Errors
    /// Returns an I/O error if input can no longer be read.
    fn prompt_play_again(&mut self) -> io::Result<String>;

    /// Show an event
    ///
    /// # Errors
    /// Returns an I/O error if output fails.
    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()>;

    /// Cosmetic pause between rounds
    ///
    /// # Errors
    /// Returns an I/O error if the surface fails while waiting.
    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn prompt_player_count(&mut self, max: usize) -> io::Result<String> {
        (**self).prompt_player_count(max)
    }

    fn prompt_player_name(&mut self, seat: usize) -> io::Result<String> {
        (**self).prompt_player_name(seat)
    }

    fn prompt_letter(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        (**self).prompt_letter(view)
    }

    fn prompt_follow_up(
        &mut self,
        view: &TurnView<'_>,
        options: &[FollowUp],
    ) -> io::Result<String> {
        (**self).prompt_follow_up(view, options)
    }

    fn prompt_solve(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        (**self).prompt_solve(view)
    }

    fn prompt_play_again(&mut self) -> io::Result<String> {
        (**self).prompt_play_again()
    }

    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        (**self).render(event)
    }

    fn pause(&mut self) -> io::Result<()> {
        (**self).pause()
    }
}

/// Whether a play-again answer means yes
#[must_use]
pub fn wants_rematch(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
