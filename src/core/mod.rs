//! Core domain types for Wordle
//!
//! Words, per-letter hints, and the feedback matching rules. Nothing in here
//! knows about word lists or search.

mod error;
mod feedback;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, HintSymbol};
pub use word::Word;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;
