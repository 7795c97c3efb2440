//! Formatting utilities for terminal output

use crate::core::{Letter, SpinOutcome};

/// Format a dollar amount with thousands separators
#[must_use]
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    result.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Spread a puzzle display into tiles, one character per tile
///
/// Word gaps become wide so the words stay readable.
#[must_use]
pub fn board_tiles(display: &str) -> String {
    let mut tiles = String::with_capacity(display.len() * 2);
    for (i, ch) in display.chars().enumerate() {
        if i > 0 {
            tiles.push(' ');
        }
        tiles.push(ch);
    }
    tiles
}

/// Short label for a wheel segment
#[must_use]
pub fn spin_label(outcome: SpinOutcome) -> String {
    match outcome {
        SpinOutcome::Cash(amount) => format_money(amount),
        SpinOutcome::Bankrupt => "BANKRUPT".to_string(),
        SpinOutcome::SkipTurn => "LOSE A TURN".to_string(),
    }
}

/// Letters joined by spaces, or a dash when there are none
#[must_use]
pub fn letter_strip(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(Letter::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
