//! Guess selection by expected partition size
//!
//! A guess splits the candidates into groups that would all receive the same
//! feedback. Its score is the sum of the squared group sizes, computed
//! directly: for every hypothetical target, count the candidates still
//! consistent with the feedback that target would give. Lower is better.

use crate::core::{Feedback, SolverError, Word};
use rayon::prelude::*;
use std::time::Instant;

/// Pick the next word to guess
///
/// - No candidates is an error.
/// - One or two candidates: guess the first one. Any computed guess could at
///   best tie, and would cost an extra round when it is not a candidate.
/// - Otherwise every allowed guess is scored and the lowest wins. Ties go to
///   whichever comes first in `allowed_guesses`, so the result is
///   deterministic even though scoring runs in parallel.
///
/// # Errors
/// `EmptyCandidatePool` if `candidates` is empty, `EmptyGuessPool` if more
/// than two candidates remain and `allowed_guesses` is empty.
///
/// # Examples
/// ```
/// use wordler::core::Word;
/// use wordler::solver::select_best;
///
/// let words = |list: &[&str]| -> Vec<Word> {
///     list.iter().map(|s| Word::new(s).unwrap()).collect()
/// };
/// let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
/// let guesses = words(&["zzzzz", "aaaaa", "abcde"]);
///
/// // ABCDE tells all three apart
/// assert_eq!(select_best(&candidates, &guesses).unwrap().text(), "abcde");
/// ```
pub fn select_best(candidates: &[Word], allowed_guesses: &[Word]) -> Result<Word, SolverError> {
    match candidates {
        [] => Err(SolverError::EmptyCandidatePool),
        [first] | [first, _] => Ok(*first),
        _ => {
            let start = Instant::now();
            let (score, index) = allowed_guesses
                .par_iter()
                .enumerate()
                .map(|(index, guess)| (score_guess(guess, candidates), index))
                .min()
                .ok_or(SolverError::EmptyGuessPool)?;
            let best = allowed_guesses[index];

            log::info!(
                "Best guess {best} (score {score}) from {} guesses over {} candidates in {:.2}s",
                allowed_guesses.len(),
                candidates.len(),
                start.elapsed().as_secs_f64()
            );
            Ok(best)
        }
    }
}

/// Score one guess against the candidates (lower is better)
///
/// Sum over every candidate target `t` of how many candidates remain
/// consistent after guessing `guess` and seeing the feedback `t` produces.
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> u64 {
    candidates
        .iter()
        .map(|target| {
            let feedback = Feedback::derive(target, guess);
            candidates.iter().filter(|c| feedback.matches(c)).count() as u64
        })
        .sum()
}
