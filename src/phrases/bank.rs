//! Random phrase selection without repeats

use super::PhraseCatalog;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::trace;

/// A phrase drawn for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub category: String,
}

/// Error type for phrase suppliers that cannot produce a phrase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    #[error("the phrase bank is empty")]
    EmptyCatalog,
    #[error("every phrase in the bank has already been played")]
    Exhausted,
}

/// Source of puzzle phrases for a game session
///
/// Implementations never return the same phrase twice within a session.
pub trait PhraseSupplier {
    /// Draw the next unused phrase
    ///
    /// # Errors
    /// Returns `SupplyError` once no unused phrase remains.
    fn next_phrase(&mut self) -> Result<Phrase, SupplyError>;

    /// Number of phrases that can still be drawn
    fn remaining(&self) -> usize;
}

/// Draws phrases from a catalog: random category first, then a random phrase in it
pub struct PhraseBank<'a, R: Rng = ThreadRng> {
    catalog: &'a PhraseCatalog,
    used: FxHashSet<(usize, usize)>,
    rng: R,
}

impl<'a> PhraseBank<'a> {
    /// Create a bank using the thread-local RNG
    ///
    /// # Errors
    /// Returns `SupplyError::EmptyCatalog` if the catalog holds no phrases.
    pub fn new(catalog: &'a PhraseCatalog) -> Result<Self, SupplyError> {
        Self::with_rng(catalog, rand::rng())
    }
}

impl<'a, R: Rng> PhraseBank<'a, R> {
    /// Create a bank with an explicit RNG
    ///
    /// # Errors
    /// Returns `SupplyError::EmptyCatalog` if the catalog holds no phrases.
    pub fn with_rng(catalog: &'a PhraseCatalog, rng: R) -> Result<Self, SupplyError> {
        if catalog.is_empty() {
            return Err(SupplyError::EmptyCatalog);
        }

        Ok(Self {
            catalog,
            used: FxHashSet::default(),
            rng,
        })
    }

    fn unused_in(&self, category: usize) -> Vec<usize> {
        (0..self.catalog.categories()[category].phrases().len())
            .filter(|&phrase| !self.used.contains(&(category, phrase)))
            .collect()
    }
}

impl<R: Rng> PhraseSupplier for PhraseBank<'_, R> {
    fn next_phrase(&mut self) -> Result<Phrase, SupplyError> {
        // Only categories with something left are eligible
        let open: Vec<usize> = (0..self.catalog.categories().len())
            .filter(|&c| !self.unused_in(c).is_empty())
            .collect();

        let &category = open.choose(&mut self.rng).ok_or(SupplyError::Exhausted)?;
        let &phrase = self
            .unused_in(category)
            .choose(&mut self.rng)
            .ok_or(SupplyError::Exhausted)?;

        self.used.insert((category, phrase));

        let category = &self.catalog.categories()[category];
        trace!(
            category = category.name(),
            remaining = self.remaining(),
            "drew phrase"
        );

        Ok(Phrase {
            text: category.phrases()[phrase].clone(),
            category: category.name().to_string(),
        })
    }

    fn remaining(&self) -> usize {
        self.catalog.len() - self.used.len()
    }
}
