//! Scripted collaborators for driving the controller in tests

use super::{FollowUp, GameEvent, InputRejection, Interaction, TurnView};
use crate::core::{SpinOutcome, Spinner};
use crate::phrases::{Phrase, PhraseSupplier, SupplyError};
use std::collections::VecDeque;
use std::io;

/// Spins a predetermined sequence of outcomes
pub struct ScriptedSpinner(VecDeque<SpinOutcome>);

impl ScriptedSpinner {
    pub fn new(outcomes: impl IntoIterator<Item = SpinOutcome>) -> Self {
        Self(outcomes.into_iter().collect())
    }
}

impl Spinner for ScriptedSpinner {
    fn spin(&mut self) -> SpinOutcome {
        // Running out of script means the test expected fewer spins
        self.0.pop_front().expect("spin script exhausted")
    }
}

/// Hands out phrases in order
pub struct FixedSupplier(VecDeque<Phrase>);

impl FixedSupplier {
    pub fn new(phrases: &[&str]) -> Self {
        Self(
            phrases
                .iter()
                .map(|&text| Phrase {
                    text: text.to_string(),
                    category: "TEST".to_string(),
                })
                .collect(),
        )
    }
}

impl PhraseSupplier for FixedSupplier {
    fn next_phrase(&mut self) -> Result<Phrase, SupplyError> {
        self.0.pop_front().ok_or(SupplyError::Exhausted)
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

/// Answers every prompt from a queue and records what it was shown
#[derive(Default)]
pub struct ScriptedSurface {
    inputs: VecDeque<String>,
    pub events: Vec<String>,
    pub rejections: Vec<InputRejection>,
    pub letter_prompts: usize,
    pub pauses: usize,
}

impl ScriptedSurface {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    fn next_input(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }

    pub fn saw(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.as_str() == kind).count()
    }

    pub fn unused_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Interaction for ScriptedSurface {
    fn prompt_player_count(&mut self, _max: usize) -> io::Result<String> {
        self.next_input()
    }

    fn prompt_player_name(&mut self, _seat: usize) -> io::Result<String> {
        self.next_input()
    }

    fn prompt_letter(&mut self, _view: &TurnView<'_>) -> io::Result<String> {
        self.letter_prompts += 1;
        self.next_input()
    }

    fn prompt_follow_up(
        &mut self,
        _view: &TurnView<'_>,
        _options: &[FollowUp],
    ) -> io::Result<String> {
        self.next_input()
    }

    fn prompt_solve(&mut self, _view: &TurnView<'_>) -> io::Result<String> {
        self.next_input()
    }

    fn prompt_play_again(&mut self) -> io::Result<String> {
        self.next_input()
    }

    fn render(&mut self, event: &GameEvent<'_>) -> io::Result<()> {
        let kind = match event {
            GameEvent::Welcome => "welcome",
            GameEvent::PlayersSeated { .. } => "seated",
            GameEvent::RoundStarted { .. } => "round",
            GameEvent::TurnStarted { .. } => "turn",
            GameEvent::Spun { .. } => "spun",
            GameEvent::VowelPurchased { .. } => "vowel",
            GameEvent::LetterRevealed { .. } => "letter",
            GameEvent::NoPlayableLetters { .. } => "stuck",
            GameEvent::SolveAttempted { solved: true, .. } => "solved",
            GameEvent::SolveAttempted { solved: false, .. } => "missed",
            GameEvent::TurnEnded { solo: true, .. } => "ended-solo",
            GameEvent::TurnEnded { solo: false, .. } => "ended",
            GameEvent::RoundWon { .. } => "won",
            GameEvent::GameOver { .. } => "over",
            GameEvent::Rejected(rejection) => {
                self.rejections.push(rejection.clone());
                "rejected"
            }
        };
        self.events.push(kind.to_string());
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        self.pauses += 1;
        Ok(())
    }
}
