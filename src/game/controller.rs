//! Game controller
//!
//! Runs a session: seats the players, plays a fixed number of rounds, and reports
//! the winner. Within a round, turns rotate through the seats starting at seat 0
//! until someone solves the puzzle. Each turn is a loop over [`TurnState`].

use super::{
    FollowUp, GameConfig, GameError, GameEvent, GameSummary, InputRejection, Interaction,
    MAX_PLAYERS, MIN_PLAYERS, Round, RoundSummary, TurnOutcome, TurnResult, TurnState, TurnView,
};
use crate::core::{IdentityGenerator, Letter, Player, Puzzle, SpinOutcome, Spinner};
use crate::phrases::PhraseSupplier;
use tracing::{debug, info};

/// A game session
///
/// The controller is the only thing that mutates players and puzzles, and only for
/// the player whose turn it is.
pub struct Game<P, S, I> {
    config: GameConfig,
    supplier: P,
    spinner: S,
    surface: I,
    ids: IdentityGenerator,
    players: Vec<Player>,
}

impl<P: PhraseSupplier, S: Spinner, I: Interaction> Game<P, S, I> {
    /// Create a session with no players seated yet
    pub fn new(config: GameConfig, supplier: P, spinner: S, surface: I) -> Self {
        Self {
            config,
            supplier,
            spinner,
            surface,
            ids: IdentityGenerator::new(),
            players: Vec::new(),
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub const fn surface(&self) -> &I {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> I {
        self.surface
    }

    /// Play the whole session
    ///
    /// Players are prompted for on the first call only.
    ///
    /// # Errors
    /// Returns `GameError::NotEnoughPhrases` before anything is prompted if the
    /// supplier cannot cover every round. Otherwise it fails only if the phrase
    /// supplier or the interaction surface fails.
    pub fn play(&mut self) -> Result<GameSummary, GameError> {
        let available = self.supplier.remaining();
        if available < self.config.rounds {
            return Err(GameError::NotEnoughPhrases {
                rounds: self.config.rounds,
                available,
            });
        }

        self.surface.render(&GameEvent::Welcome)?;
        if self.players.is_empty() {
            self.seat_players()?;
        }
        info!(
            players = self.players.len(),
            rounds = self.config.rounds,
            "game starting"
        );

        let mut rounds = Vec::with_capacity(self.config.rounds);
        for number in 1..=self.config.rounds {
            rounds.push(self.play_round(number)?);
            if number < self.config.rounds {
                self.surface.pause()?;
            }
        }

        let summary = GameSummary {
            players: self.players.clone(),
            rounds,
        };
        if let Some(winner) = summary.winner() {
            info!(
                winner = winner.name(),
                total = winner.total_money(),
                "game over"
            );
            self.surface.render(&GameEvent::GameOver {
                winner,
                standings: &summary.players,
            })?;
        }

        Ok(summary)
    }

    fn seat_players(&mut self) -> Result<(), GameError> {
        let count = loop {
            let input = self.surface.prompt_player_count(MAX_PLAYERS)?;
            match input.trim().parse::<usize>() {
                Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => break n,
                _ => self
                    .surface
                    .render(&GameEvent::Rejected(InputRejection::PlayerCount {
                        min: MIN_PLAYERS,
                        max: MAX_PLAYERS,
                    }))?,
            }
        };

        for seat in 0..count {
            let input = self.surface.prompt_player_name(seat)?;
            let name = match input.trim() {
                "" => format!("Player {}", seat + 1),
                name => name.to_string(),
            };
            let player = Player::new(self.ids.next_id(), name);
            debug!(id = %player.id(), name = player.name(), seat, "player seated");
            self.players.push(player);
        }

        self.surface.render(&GameEvent::PlayersSeated {
            players: &self.players,
        })?;
        Ok(())
    }

    fn play_round(&mut self, number: usize) -> Result<RoundSummary, GameError> {
        let phrase = self.supplier.next_phrase()?;
        info!(round = number, category = %phrase.category, "round starting");

        let mut round = Round::new(number, Puzzle::with_category(phrase.text, phrase.category));
        self.surface.render(&GameEvent::RoundStarted {
            number,
            total: self.config.rounds,
            puzzle: round.puzzle(),
        })?;

        // A phrase with no letters is solved before anyone plays
        let mut seat = 0;
        while !round.puzzle().is_solved()
            && self.play_turn(&mut round, seat)? == TurnResult::Ended
        {
            seat = (seat + 1) % self.players.len();
        }

        self.finish_round(&round, seat)
    }

    fn play_turn(&mut self, round: &mut Round, seat: usize) -> Result<TurnResult, GameError> {
        round.begin_turn();
        self.surface.render(&GameEvent::TurnStarted {
            player: &self.players[seat],
            puzzle: round.puzzle(),
            standings: &self.players,
        })?;

        let mut state = TurnState::AwaitingSpin;
        loop {
            state = match state {
                TurnState::AwaitingSpin => self.spin(round, seat)?,
                TurnState::Guessing { cash } => self.guess_letter(round, seat, cash)?,
                TurnState::Choosing => self.choose_follow_up(round, seat)?,
                TurnState::Solving => self.attempt_solve(round, seat)?,
                TurnState::TurnEnded => {
                    self.surface.render(&GameEvent::TurnEnded {
                        player: &self.players[seat],
                        solo: self.players.len() == 1,
                    })?;
                    return Ok(TurnResult::Ended);
                }
                TurnState::RoundSolved => return Ok(TurnResult::Solved),
            };
        }
    }

    fn spin(&mut self, round: &mut Round, seat: usize) -> Result<TurnState, GameError> {
        let outcome = self.spinner.spin();
        let player = &mut self.players[seat];
        debug!(player = player.name(), ?outcome, "wheel spun");

        if outcome == SpinOutcome::Bankrupt {
            info!(
                player = player.name(),
                lost = player.round_money(),
                "bankrupt"
            );
            player.bankrupt();
            round.record_bankruptcy();
        }

        self.surface.render(&GameEvent::Spun {
            player: &self.players[seat],
            outcome,
        })?;
        Ok(TurnState::after_spin(outcome))
    }

    fn guess_letter(
        &mut self,
        round: &mut Round,
        seat: usize,
        cash: u32,
    ) -> Result<TurnState, GameError> {
        let cost = self.config.vowel_cost;
        if round.playable_letters(&self.players[seat], cost).is_empty() {
            self.surface.render(&GameEvent::NoPlayableLetters {
                player: &self.players[seat],
            })?;
            return Ok(TurnState::Solving);
        }

        let letter = loop {
            let input = self.surface.prompt_letter(&TurnView {
                player: &self.players[seat],
                round,
                spin: Some(cash),
                vowel_cost: cost,
            })?;
            match accept_letter(&mut self.players[seat], round, &input, cost) {
                Ok(letter) => break letter,
                Err(rejection) => {
                    debug!(%rejection, "letter rejected");
                    self.surface.render(&GameEvent::Rejected(rejection))?;
                }
            }
        };

        round.record_guess(letter);
        if letter.is_vowel() {
            self.surface.render(&GameEvent::VowelPurchased {
                player: &self.players[seat],
                letter,
                cost,
            })?;
        }

        let matches = round.puzzle_mut().guess_letter(letter);
        let credited = self.players[seat].apply_letter_result(matches, cash);
        debug!(%letter, matches, credited, "letter called");

        self.surface.render(&GameEvent::LetterRevealed {
            player: &self.players[seat],
            letter,
            matches,
            credited,
            puzzle: round.puzzle(),
        })?;

        let outcome = if matches == 0 {
            TurnOutcome::NoMatch
        } else if round.puzzle().is_solved() {
            TurnOutcome::Solved
        } else {
            TurnOutcome::Matched(matches)
        };
        Ok(TurnState::resolve(outcome))
    }

    fn choose_follow_up(&mut self, round: &Round, seat: usize) -> Result<TurnState, GameError> {
        loop {
            let input = self.surface.prompt_follow_up(
                &TurnView {
                    player: &self.players[seat],
                    round,
                    spin: None,
                    vowel_cost: self.config.vowel_cost,
                },
                &FollowUp::ALL,
            )?;
            match input.parse::<FollowUp>() {
                Ok(choice) => return Ok(TurnState::after_choice(choice)),
                Err(()) => self
                    .surface
                    .render(&GameEvent::Rejected(InputRejection::InvalidChoice))?,
            }
        }
    }

    fn attempt_solve(&mut self, round: &mut Round, seat: usize) -> Result<TurnState, GameError> {
        let guess = loop {
            let input = self.surface.prompt_solve(&TurnView {
                player: &self.players[seat],
                round,
                spin: None,
                vowel_cost: self.config.vowel_cost,
            })?;
            match input.trim() {
                "" => self
                    .surface
                    .render(&GameEvent::Rejected(InputRejection::EmptySolve))?,
                guess => break guess.to_string(),
            }
        };

        let solved = round.puzzle_mut().solve_attempt(&guess);
        info!(
            player = self.players[seat].name(),
            solved,
            "solve attempted"
        );

        self.surface.render(&GameEvent::SolveAttempted {
            player: &self.players[seat],
            guess: &guess,
            solved,
            puzzle: round.puzzle(),
        })?;

        let outcome = if solved {
            TurnOutcome::Solved
        } else {
            TurnOutcome::NoMatch
        };
        Ok(TurnState::resolve(outcome))
    }

    /// Bank the winner's round money, then clear everyone's
    fn finish_round(&mut self, round: &Round, seat: usize) -> Result<RoundSummary, GameError> {
        let winnings = self.players[seat].round_money();
        self.players[seat].win_round();
        for player in &mut self.players {
            player.new_round();
        }

        let winner = &self.players[seat];
        info!(
            round = round.number(),
            winner = winner.name(),
            winnings,
            turns = round.turns(),
            "round won"
        );

        self.surface.render(&GameEvent::RoundWon {
            number: round.number(),
            winner,
            winnings,
            puzzle: round.puzzle(),
            standings: &self.players,
        })?;

        Ok(RoundSummary {
            number: round.number(),
            category: round.puzzle().category().map(str::to_string),
            phrase: round.puzzle().phrase().to_string(),
            winner: winner.id(),
            winnings,
            turns: round.turns(),
            bankruptcies: round.bankruptcies(),
        })
    }
}

/// Validate a letter and, for vowels, take payment
///
/// Nothing changes unless the letter is accepted.
fn accept_letter(
    player: &mut Player,
    round: &Round,
    input: &str,
    vowel_cost: u32,
) -> Result<Letter, InputRejection> {
    let letter = Letter::parse(input)?;

    if round.is_guessed(letter) {
        return Err(InputRejection::AlreadyGuessed(letter.as_char()));
    }
    if letter.is_vowel() {
        player.purchase_vowel(vowel_cost)?;
    }

    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpinOutcome::{Bankrupt, Cash, SkipTurn};
    use crate::core::{LetterError, PlayerError};
    use crate::game::testing::{FixedSupplier, ScriptedSpinner, ScriptedSurface};

    const NO_SPINS: [SpinOutcome; 0] = [];

    type TestGame = Game<FixedSupplier, ScriptedSpinner, ScriptedSurface>;

    fn game(
        rounds: usize,
        phrases: &[&str],
        spins: impl IntoIterator<Item = SpinOutcome>,
        inputs: &[&str],
    ) -> TestGame {
        Game::new(
            GameConfig::new(rounds, 250),
            FixedSupplier::new(phrases),
            ScriptedSpinner::new(spins),
            ScriptedSurface::new(inputs),
        )
    }

    #[test]
    fn single_round_solved_by_letters() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(300), Cash(200), Cash(100)],
            &["1", "Kim", "d", "spin", "o", "spin", "g"],
        );

        let summary = game.play().unwrap();
        let kim = &summary.players[0];

        // 300 for D, 200 for O less the 250 it cost, 100 for G
        assert_eq!(kim.name(), "Kim");
        assert_eq!(kim.total_money(), 350);
        assert_eq!(kim.round_money(), 0);
        assert_eq!(summary.rounds.len(), 1);
        assert_eq!(summary.rounds[0].winnings, 350);
        assert_eq!(summary.rounds[0].turns, 1);
        assert_eq!(game.surface().saw("over"), 1);
    }

    #[test]
    fn reguessing_a_letter_never_pays_twice() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100), Cash(200)],
            &["1", "Kim", "d", "spin", "d", "g", "solve", "dog"],
        );

        let summary = game.play().unwrap();

        assert_eq!(
            game.surface().rejections,
            [InputRejection::AlreadyGuessed('D')]
        );
        assert_eq!(summary.players[0].total_money(), 300);
    }

    #[test]
    fn invalid_letters_are_reprompted() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(500)],
            &["1", "Kim", "7", "dg", "", "d", "2", "DOG"],
        );

        game.play().unwrap();

        let surface = game.surface();
        assert_eq!(
            surface.rejections,
            [
                InputRejection::NotALetter(LetterError::NotAlphabetic('7')),
                InputRejection::NotALetter(LetterError::TooLong(2)),
                InputRejection::NotALetter(LetterError::Empty),
            ]
        );
        assert_eq!(surface.letter_prompts, 4);
    }

    #[test]
    fn unaffordable_vowel_is_rejected_without_charge() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(300), Cash(100)],
            &["1", "Kim", "o", "d", "spin", "o", "solve", "dog"],
        );

        let summary = game.play().unwrap();

        assert_eq!(
            game.surface().rejections,
            [InputRejection::CannotAffordVowel(
                PlayerError::InsufficientFunds {
                    cost: 250,
                    available: 0
                }
            )]
        );
        // 300 for D, minus 250 for O, plus 100 for O
        assert_eq!(summary.rounds[0].winnings, 150);
        assert_eq!(game.surface().saw("vowel"), 1);
    }

    #[test]
    fn bankrupt_clears_round_money_and_ends_turn() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100), Bankrupt],
            &["2", "A", "B", "d", "spin"],
        );
        game.seat_players().unwrap();
        let mut round = Round::new(1, Puzzle::new("DOG"));

        let result = game.play_turn(&mut round, 0).unwrap();

        assert_eq!(result, TurnResult::Ended);
        assert_eq!(game.players()[0].round_money(), 0);
        assert_eq!(game.players()[0].total_money(), 0);
        assert_eq!(round.bankruptcies(), 1);
        assert_eq!(game.surface().saw("ended"), 1);
    }

    #[test]
    fn bankrupt_keeps_total_money() {
        let mut game = game(
            2,
            &["DOG", "CAT"],
            [Cash(400), Cash(100), Bankrupt],
            &["1", "Kim", "d", "solve", "dog", "c", "spin"],
        );
        game.seat_players().unwrap();
        game.play_round(1).unwrap();
        assert_eq!(game.players()[0].total_money(), 400);

        let mut round = Round::new(2, Puzzle::new("CAT"));
        game.play_turn(&mut round, 0).unwrap();

        assert_eq!(game.players()[0].round_money(), 0);
        assert_eq!(game.players()[0].total_money(), 400);
    }

    #[test]
    fn skip_turn_passes_play() {
        let mut game = game(
            1,
            &["DOG"],
            [SkipTurn, Cash(100)],
            &["2", "A", "B", "d", "solve", "dog"],
        );

        let summary = game.play().unwrap();

        assert_eq!(summary.rounds[0].winner, summary.players[1].id());
        assert_eq!(summary.rounds[0].turns, 2);
        assert_eq!(summary.players[0].total_money(), 0);
        assert_eq!(summary.players[1].total_money(), 100);
    }

    #[test]
    fn round_transfer_only_pays_the_winner() {
        // A earns 300 then misses; B solves with 500 in hand
        let mut game = game(
            1,
            &["DOG"],
            [Cash(300), Cash(100), Cash(500)],
            &["2", "A", "B", "d", "spin", "x", "g", "solve", "dog"],
        );

        let summary = game.play().unwrap();
        let (a, b) = (&summary.players[0], &summary.players[1]);

        assert_eq!(a.round_money(), 0);
        assert_eq!(a.total_money(), 0);
        assert_eq!(b.round_money(), 0);
        assert_eq!(b.total_money(), 500);
        assert_eq!(summary.rounds[0].winnings, 500);
    }

    #[test]
    fn winner_banks_three_hundred() {
        let mut game = game(
            1,
            &["DOGS"],
            [Cash(100), Cash(200)],
            &["1", "Kim", "s", "spin", "d", "solve", "dogs"],
        );

        let summary = game.play().unwrap();

        assert_eq!(summary.players[0].total_money(), 300);
        assert_eq!(summary.players[0].round_money(), 0);
    }

    #[test]
    fn failed_solve_ends_the_turn() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100), Cash(100)],
            &["2", "A", "B", "d", "solve", "cat", "g", "solve", "dog"],
        );

        let summary = game.play().unwrap();

        assert_eq!(game.surface().saw("missed"), 1);
        assert_eq!(game.surface().saw("solved"), 1);
        assert_eq!(summary.rounds[0].winner, summary.players[1].id());
    }

    #[test]
    fn solve_ends_round_before_letters_are_complete() {
        let mut game = game(
            1,
            &["Grand Canyon"],
            [Cash(100)],
            &["1", "Kim", "n", "2", "grand canyon"],
        );

        let summary = game.play().unwrap();

        assert_eq!(summary.rounds[0].winnings, 300);
        assert_eq!(summary.players[0].total_money(), 300);
    }

    #[test]
    fn solo_miss_reports_try_again() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100), Cash(100)],
            &["1", "Kim", "z", "d", "solve", "dog"],
        );

        game.play().unwrap();

        assert_eq!(game.surface().saw("ended-solo"), 1);
    }

    #[test]
    fn invalid_follow_up_is_reprompted() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100)],
            &["1", "Kim", "d", "maybe", "9", "solve", "dog"],
        );

        game.play().unwrap();

        assert_eq!(
            game.surface().rejections,
            [InputRejection::InvalidChoice, InputRejection::InvalidChoice]
        );
    }

    #[test]
    fn empty_solve_is_reprompted() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100)],
            &["1", "Kim", "d", "solve", "  ", "dog"],
        );

        game.play().unwrap();

        assert_eq!(game.surface().rejections, [InputRejection::EmptySolve]);
    }

    #[test]
    fn player_count_is_reprompted_until_valid() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100)],
            &["0", "4", "two", "2", "Ann", "", "d", "solve", "dog"],
        );

        let summary = game.play().unwrap();

        assert_eq!(game.surface().rejections.len(), 3);
        assert!(
            game.surface()
                .rejections
                .iter()
                .all(|r| *r == InputRejection::PlayerCount { min: 1, max: 3 })
        );
        assert_eq!(summary.players.len(), 2);
        assert_eq!(summary.players[1].name(), "Player 2");
    }

    #[test]
    fn player_ids_are_sequential_per_session() {
        let mut game = game(
            1,
            &["DOG"],
            [Cash(100)],
            &["3", "A", "A", "C", "d", "solve", "dog"],
        );

        let summary = game.play().unwrap();
        let ids: Vec<u32> = summary.players.iter().map(|p| p.id().value()).collect();

        assert_eq!(ids, [0, 1, 2]);
        assert_ne!(summary.players[0], summary.players[1]);
    }

    #[test]
    fn every_round_starts_at_seat_zero() {
        // Round 1: A skips, B solves. Round 2: A goes first again and solves.
        let mut game = game(
            2,
            &["DOG", "CAT"],
            [SkipTurn, Cash(100), Cash(200)],
            &["2", "A", "B", "d", "solve", "dog", "c", "solve", "cat"],
        );

        let summary = game.play().unwrap();

        assert_eq!(summary.rounds[0].winner, summary.players[1].id());
        assert_eq!(summary.rounds[1].winner, summary.players[0].id());
        assert_eq!(game.surface().pauses, 1);
    }

    #[test]
    fn full_game_picks_richest_player() {
        let mut game = game(
            3,
            &["DOG", "CAT", "COW"],
            [Cash(100), SkipTurn, Cash(900), Cash(500)],
            &[
                "2", "A", "B", // seats
                "d", "solve", "dog", // round 1: A wins 100
                "t", "solve", "cat", // round 2: A skips, B wins 900
                "w", "solve", "cow", // round 3: A wins 500
            ],
        );

        let summary = game.play().unwrap();

        assert_eq!(summary.players[0].total_money(), 600);
        assert_eq!(summary.players[1].total_money(), 900);
        assert_eq!(summary.winner().unwrap().name(), "B");
        assert_eq!(game.surface().saw("won"), 3);
        assert_eq!(game.surface().unused_inputs(), 0);
    }

    #[test]
    fn too_few_phrases_is_fatal_before_prompting() {
        let mut game = game(3, &["DOG"], NO_SPINS, &[]);

        let err = game.play().unwrap_err();

        assert!(matches!(
            err,
            GameError::NotEnoughPhrases {
                rounds: 3,
                available: 1
            }
        ));
        assert!(game.surface().events.is_empty());
    }

    #[test]
    fn closed_input_ends_the_session() {
        let mut game = game(1, &["DOG"], NO_SPINS, &["1"]);
        assert!(matches!(game.play(), Err(GameError::Interaction(_))));
    }

    #[test]
    fn phrase_without_letters_needs_no_turns() {
        let mut game = game(1, &["1, 2, 3!"], NO_SPINS, &["1", "Kim"]);

        let summary = game.play().unwrap();

        assert_eq!(summary.rounds[0].turns, 0);
        assert_eq!(summary.rounds[0].winnings, 0);
        assert_eq!(game.surface().saw("turn"), 0);
        assert_eq!(game.surface().saw("won"), 1);
    }

    #[test]
    fn stuck_player_must_solve() {
        // Only vowels hidden, every consonant called, no money for vowels
        let consonants: Vec<String> = Letter::alphabet()
            .filter(|l| !l.is_vowel())
            .map(|l| l.to_string())
            .collect();

        let mut inputs = vec!["1", "Kim"];
        inputs.extend(consonants.iter().map(String::as_str));
        inputs.push("AE");

        let spins = std::iter::repeat_n(Cash(100), consonants.len() + 1);
        let mut game = game(1, &["AE"], spins, &inputs);

        let summary = game.play().unwrap();

        assert_eq!(game.surface().saw("stuck"), 1);
        assert_eq!(game.surface().saw("ended-solo"), consonants.len());
        assert_eq!(summary.rounds[0].turns, consonants.len() + 1);
    }
}
