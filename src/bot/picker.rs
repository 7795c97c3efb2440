//! Letter choice by English letter frequency

use crate::core::Letter;
use rand::Rng;

/// Consonants from most to least common in English text
pub const CONSONANT_ORDER: &str = "TNSHRDLCMWFGYPBVKJXQZ";

/// Vowels from most to least common in English text
pub const VOWEL_ORDER: &str = "EAOIU";

fn rank(letter: Letter, order: &str) -> usize {
    order
        .chars()
        .position(|ch| letter.matches(ch))
        .unwrap_or(order.len())
}

/// Choose the next letter to call from `playable`
///
/// With probability `vowel_appetite` the most common playable vowel is bought;
/// otherwise the most common playable consonant is called. Falls back to whichever
/// kind is available.
pub fn pick_letter<R: Rng>(
    playable: &[Letter],
    vowel_appetite: f64,
    rng: &mut R,
) -> Option<Letter> {
    let (vowels, consonants): (Vec<Letter>, Vec<Letter>) =
        playable.iter().partition(|letter| letter.is_vowel());

    let best_vowel = vowels
        .into_iter()
        .min_by_key(|&letter| rank(letter, VOWEL_ORDER));
    let best_consonant = consonants
        .into_iter()
        .min_by_key(|&letter| rank(letter, CONSONANT_ORDER));

    match (best_consonant, best_vowel) {
        (Some(consonant), Some(vowel)) => {
            if rng.random_bool(vowel_appetite.clamp(0.0, 1.0)) {
                Some(vowel)
            } else {
                Some(consonant)
            }
        }
        (consonant, vowel) => consonant.or(vowel),
    }
}
