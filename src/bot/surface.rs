//! Scripted player that drives the controller without a human

use super::pick_letter;
use crate::game::{FollowUp, GameEvent, Interaction, MAX_PLAYERS, MIN_PLAYERS, TurnView};
use rand::Rng;
use std::io;
use tracing::trace;

/// Share of the board a bot needs to see before it solves
pub const DEFAULT_RECOGNITION: f64 = 0.6;

/// Chance a bot buys a vowel when it can afford one
const VOWEL_APPETITE: f64 = 0.3;

/// Plays every seat at the table
///
/// A bot calls letters by frequency and solves once `recognition` of the phrase's
/// letters are showing, or when there is nothing left it can call.
pub struct BotSurface<R> {
    players: usize,
    recognition: f64,
    rng: R,
}

impl<R: Rng> BotSurface<R> {
    /// `players` is clamped to the table size and `recognition` to `0.0..=1.0`
    pub fn new(players: usize, recognition: f64, rng: R) -> Self {
        Self {
            players: players.clamp(MIN_PLAYERS, MAX_PLAYERS),
            recognition: recognition.clamp(0.0, 1.0),
            rng,
        }
    }

    #[must_use]
    pub const fn players(&self) -> usize {
        self.players
    }
}

impl<R: Rng> Interaction for BotSurface<R> {
    fn prompt_player_count(&mut self, _max: usize) -> io::Result<String> {
        Ok(self.players.to_string())
    }

    fn prompt_player_name(&mut self, seat: usize) -> io::Result<String> {
        Ok(format!("Bot {}", seat + 1))
    }

    fn prompt_letter(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        pick_letter(&view.playable_letters(), VOWEL_APPETITE, &mut self.rng)
            .map(|letter| letter.to_string())
            .ok_or_else(|| io::Error::other("no playable letter to call"))
    }

    fn prompt_follow_up(
        &mut self,
        view: &TurnView<'_>,
        _options: &[FollowUp],
    ) -> io::Result<String> {
        let choice = if view.puzzle().revealed_ratio() >= self.recognition {
            FollowUp::Solve
        } else {
            FollowUp::SpinAgain
        };
        let answer = match choice {
            FollowUp::SpinAgain => "spin",
            FollowUp::Solve => "solve",
        };
        Ok(answer.to_string())
    }

    fn prompt_solve(&mut self, view: &TurnView<'_>) -> io::Result<String> {
        Ok(view.puzzle().phrase().to_string())
    }

    fn prompt_play_again(&mut self) -> io::Result<String> {
        Ok("no".to_string())
    }

    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        trace!(?event, "bot saw event");
        Ok(())
    }
}
