//! Command implementations
//!
//! Each command returns plain data; printing lives in `crate::output`.

pub mod diagnose;
pub mod next;
pub mod play;
pub mod solve;
pub mod solve_all;
pub mod stats;

pub use diagnose::{derive_hint, filter_answers, match_words};
pub use next::{NextGuess, suggest_next};
pub use play::{PlayOutcome, play_game, random_target};
pub use solve::{SolveReport, solve_word};
pub use solve_all::{SolveAllSummary, run_solve_all};
pub use stats::{ResultsRecord, ResultsStats, load_results, read_results};

use crate::core::{Feedback, SolverError};

/// Turn `guess hint guess hint ...` arguments into feedback
///
/// # Errors
/// `OddHintArguments` for an odd count, otherwise the first invalid guess or
/// hint.
pub fn parse_hint_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Feedback>, SolverError> {
    if args.len() % 2 != 0 {
        return Err(SolverError::OddHintArguments(args.len()));
    }
    args.chunks_exact(2)
        .map(|pair| Feedback::parse(pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}
