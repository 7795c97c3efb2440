//! Simulate command
//!
//! Plays many complete bot-only games in parallel and aggregates the results.

use crate::bot::BotSurface;
use crate::core::Wheel;
use crate::game::{Game, GameConfig, GameError, GameSummary};
use crate::phrases::{PhraseBank, PhraseCatalog};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Settings for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    pub players: usize,
    /// Revealed share of a puzzle at which bots solve
    pub recognition: f64,
    /// Base seed; game `i` is seeded from `seed + i`
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Aggregate statistics over a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub players: usize,
    pub rounds: usize,
    /// Game wins per seat (zero-based)
    pub seat_wins: FxHashMap<usize, usize>,
    pub average_winning_total: f64,
    pub max_winning_total: u32,
    pub average_turns_per_round: f64,
    pub bankruptcies_per_game: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    /// Share of games won from `seat`, from 0.0 to 1.0
    #[must_use]
    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.seat_wins.get(&seat).copied().unwrap_or(0) as f64 / self.games as f64
    }
}

fn play_one(
    catalog: &PhraseCatalog,
    config: &SimulationConfig,
    seed: u64,
) -> Result<GameSummary, GameError> {
    let mut seeds = StdRng::seed_from_u64(seed);
    let bank = PhraseBank::with_rng(catalog, StdRng::seed_from_u64(seeds.random()))?;
    let wheel = Wheel::with_rng(StdRng::seed_from_u64(seeds.random()));
    let bots = BotSurface::new(
        config.players,
        config.recognition,
        StdRng::seed_from_u64(seeds.random()),
    );

    Game::new(config.game, bank, wheel, bots).play()
}

/// Run `config.games` bot games across all cores
///
/// # Errors
///
/// Returns the first `GameError` any game hits, such as a catalog too small for
/// the configured number of rounds.
pub fn run_simulation(
    catalog: &PhraseCatalog,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(games = config.games, base_seed, "simulation starting");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let summaries = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let summary = play_one(catalog, config, base_seed.wrapping_add(i as u64));
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(aggregate(&summaries, config, duration))
}

fn aggregate(
    summaries: &[GameSummary],
    config: &SimulationConfig,
    duration: Duration,
) -> SimulationResult {
    let mut seat_wins: FxHashMap<usize, usize> = FxHashMap::default();
    let mut winning_total: u64 = 0;
    let mut max_winning_total = 0;
    let mut total_turns = 0;
    let mut total_rounds = 0;
    let mut bankruptcies = 0;

    for summary in summaries {
        if let (Some(seat), Some(winner)) = (summary.winner_seat(), summary.winner()) {
            *seat_wins.entry(seat).or_insert(0) += 1;
            winning_total += u64::from(winner.total_money());
            max_winning_total = max_winning_total.max(winner.total_money());
        }
        for round in &summary.rounds {
            total_turns += round.turns;
            bankruptcies += round.bankruptcies;
        }
        total_rounds += summary.rounds.len();
    }

    let games = summaries.len();
    let per_game = |value: f64| if games == 0 { 0.0 } else { value / games as f64 };

    SimulationResult {
        games,
        players: config.players,
        rounds: config.game.rounds,
        seat_wins,
        average_winning_total: per_game(winning_total as f64),
        max_winning_total,
        average_turns_per_round: if total_rounds == 0 {
            0.0
        } else {
            total_turns as f64 / total_rounds as f64
        },
        bankruptcies_per_game: per_game(bankruptcies as f64),
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
