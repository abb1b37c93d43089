//! Error taxonomy shared by the library

use super::{Feedback, Word};
use thiserror::Error;

/// Everything that can go wrong while validating input or solving
///
/// Nothing here is retryable: inputs are either valid or rejected.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Input is not exactly five lowercase ASCII letters
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// Hint text is not exactly five of `g`, `y` or `.`
    #[error("Invalid hint: {0:?}")]
    InvalidHint(String),

    /// Guess selection was asked to pick from no candidates at all
    #[error("No candidate words to choose from")]
    EmptyCandidatePool,

    /// More than two candidates remain but nothing may be guessed
    #[error("No allowed guess words to choose from")]
    EmptyGuessPool,

    /// The hints seen so far cannot all be satisfied by any word
    #[error("No matching words found after hint #{step} ({feedback})")]
    NoMatchingWords { step: usize, feedback: Feedback },

    /// The solver used every allowed guess without finding the answer
    #[error("Answer \"{target}\" was not found in {max_guesses} tries")]
    GuessBudgetExhausted { target: Word, max_guesses: usize },

    /// A results-file line did not parse as `<word>, <count>`
    #[error("Bad results data: {line:?} ({reason})")]
    MalformedResultsRecord { line: String, reason: String },

    /// Guess/hint arguments must come in pairs
    #[error("An even number of guess/hint arguments is required, got {0}")]
    OddHintArguments(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
