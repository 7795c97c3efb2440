//! Computer players
//!
//! A [`BotSurface`] answers every prompt a human would, which lets the simulation
//! command run thousands of complete games through the real controller.

mod picker;
mod surface;

pub use picker::{CONSONANT_ORDER, VOWEL_ORDER, pick_letter};
pub use surface::{BotSurface, DEFAULT_RECOGNITION};
