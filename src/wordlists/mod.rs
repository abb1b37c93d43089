//! Word lists for Wordle solving
//!
//! Embedded tables for the default vocabulary, and a loader for word-list
//! files supplied at run time.
//!
//! The embedded answers are a 500-word list of common words, not the standard
//! 2,315-word Wordle answer list. Pass `--answers`/`--guesses` to solve against
//! the full lists.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA_GUESSES, EXTRA_GUESSES_COUNT};
