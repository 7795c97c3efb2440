//! Phrase bank for puzzles
//!
//! Provides the embedded categories, loading from a directory, and the no-repeat
//! random supplier a game draws its puzzles from.

mod bank;
mod catalog;
mod embedded;
pub mod loader;

pub use bank::{Phrase, PhraseBank, PhraseSupplier, SupplyError};
pub use catalog::{Category, PhraseCatalog};
