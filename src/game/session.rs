//! Back-to-back game sessions on one surface

use super::{Game, GameConfig, GameError, GameSummary, Interaction, wants_rematch};
use crate::core::Wheel;
use crate::phrases::{PhraseBank, PhraseCatalog};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Play games until the players decline a rematch
///
/// Every game gets a fresh phrase bank, wheel and player roster. With a `seed`
/// the whole run is deterministic.
///
/// # Errors
/// Returns the first `GameError` any session hits.
pub fn run_sessions<I: Interaction>(
    surface: &mut I,
    catalog: &PhraseCatalog,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<Vec<GameSummary>, GameError> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut summaries = Vec::new();

    loop {
        let bank = PhraseBank::with_rng(catalog, StdRng::seed_from_u64(rng.random()))?;
        let wheel = Wheel::with_rng(StdRng::seed_from_u64(rng.random()));

        let mut game = Game::new(config, bank, wheel, &mut *surface);
        summaries.push(game.play()?);
        info!(games = summaries.len(), "session finished");

        if !wants_rematch(&surface.prompt_play_again()?) {
            return Ok(summaries);
        }
    }
}
