//! Formatting utilities for terminal output

use crate::core::{Feedback, HintSymbol};
use colored::Colorize;
use std::time::Duration;

/// Render a guess with each letter on its hint color
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .guess()
        .letters()
        .iter()
        .zip(feedback.hints())
        .map(|(&letter, hint)| {
            let letter = char::from(letter).to_ascii_uppercase().to_string();
            match hint {
                HintSymbol::Green => letter.black().on_green().to_string(),
                HintSymbol::Yellow => letter.black().on_yellow().to_string(),
                HintSymbol::Grey => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Elapsed time as seconds with two decimals
#[must_use]
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// Create a bar string scaled against `max`
#[must_use]
pub fn create_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
