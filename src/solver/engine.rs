//! Main Wordle solver interface

use super::config::SolverConfig;
use super::pool::filter;
use super::selector::select_best;
use super::vocabulary::Vocabulary;
use crate::core::{Feedback, SolverError, Word};
use std::borrow::Cow;
use std::slice;

/// How a solve ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The target was guessed
    Solved,
    /// The guess budget ran out first
    Exhausted,
}

/// One guess made during a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Outcome of solving for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub target: Word,
    pub status: SolveStatus,
    pub steps: Vec<GuessStep>,
}

impl Solution {
    /// Number of guesses made
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// The guessed words in order
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.steps.iter().map(|step| step.feedback.guess())
    }

    /// Treat an exhausted budget as an error
    ///
    /// # Errors
    /// `GuessBudgetExhausted` unless the target was found.
    pub fn into_result(self) -> Result<Self, SolverError> {
        match self.status {
            SolveStatus::Solved => Ok(self),
            SolveStatus::Exhausted => Err(SolverError::GuessBudgetExhausted {
                target: self.target,
                max_guesses: self.steps.len(),
            }),
        }
    }
}

/// Main Wordle solver
///
/// Works from a vocabulary and configuration supplied by the caller; holds no
/// state between solves.
pub struct Solver<'a> {
    vocabulary: &'a Vocabulary,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given word lists
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary, config: SolverConfig) -> Self {
        Self { vocabulary, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Play a full game against a known target
    ///
    /// Each turn guesses the last remaining candidate if only one is left,
    /// the configured opener on the first turn, and otherwise the best scoring
    /// guess. After a wrong guess the candidates are filtered by its feedback
    /// and the guess itself is dropped from them, so the same word is never
    /// guessed twice.
    ///
    /// Running out of guesses is not an error; it is reported through
    /// `Solution::status`. Use `Solution::into_result` to treat it as one.
    ///
    /// # Errors
    /// `NoMatchingWords` if filtering leaves no candidates, which happens when
    /// the target is not in the answer list. Errors from `select_best` are
    /// passed through.
    pub fn solve(&self, target: &Word) -> Result<Solution, SolverError> {
        let mut candidates = self.vocabulary.answers().to_vec();
        let mut guesses = Cow::Borrowed(self.vocabulary.guesses());
        let mut steps = Vec::new();

        for turn in 0..self.config.guess_budget() {
            let guess = self.choose_guess(turn, &candidates, &guesses)?;
            let feedback = Feedback::derive(target, &guess);
            let candidates_before = candidates.len();

            if guess == *target {
                log::debug!("Guess #{} {feedback}: solved", turn + 1);
                steps.push(GuessStep {
                    feedback,
                    candidates_before,
                    candidates_after: 1,
                });
                return Ok(Solution {
                    target: *target,
                    status: SolveStatus::Solved,
                    steps,
                });
            }

            candidates = filter(&candidates, slice::from_ref(&feedback));
            candidates.retain(|word| *word != guess);
            if self.config.hard_mode {
                guesses = Cow::Owned(filter(&guesses, slice::from_ref(&feedback)));
            }

            log::debug!(
                "Guess #{} {feedback}: {candidates_before} -> {} candidates",
                turn + 1,
                candidates.len()
            );
            steps.push(GuessStep {
                feedback,
                candidates_before,
                candidates_after: candidates.len(),
            });

            if candidates.is_empty() {
                return Err(SolverError::NoMatchingWords {
                    step: turn + 1,
                    feedback,
                });
            }
        }

        Ok(Solution {
            target: *target,
            status: SolveStatus::Exhausted,
            steps,
        })
    }

    fn choose_guess(
        &self,
        turn: usize,
        candidates: &[Word],
        guesses: &[Word],
    ) -> Result<Word, SolverError> {
        if let [only] = candidates {
            return Ok(*only);
        }
        if turn == 0
            && let Some(opener) = self.config.opening_guess
        {
            return Ok(opener);
        }
        select_best(candidates, guesses)
    }

    /// Answers still possible after the given hints
    ///
    /// A guess whose hint is not all green cannot be the answer, so it is
    /// removed even if it would otherwise match.
    ///
    /// # Errors
    /// `NoMatchingWords` naming the first hint after which nothing remains.
    pub fn candidates(&self, history: &[Feedback]) -> Result<Vec<Word>, SolverError> {
        let mut candidates = self.vocabulary.answers().to_vec();

        for (index, feedback) in history.iter().enumerate() {
            candidates = filter(&candidates, slice::from_ref(feedback));
            if !feedback.is_solved() {
                candidates.retain(|word| word != feedback.guess());
            }
            if candidates.is_empty() {
                return Err(SolverError::NoMatchingWords {
                    step: index + 1,
                    feedback: *feedback,
                });
            }
        }

        Ok(candidates)
    }

    /// Suggest the next guess given hints received so far
    ///
    /// With no hints and an opener configured, the opener is returned without
    /// searching. In hard mode the guess list is narrowed by the hints too.
    ///
    /// # Errors
    /// `NoMatchingWords` if the hints are jointly unsatisfiable, or errors from
    /// `select_best`.
    pub fn next_guess(&self, history: &[Feedback]) -> Result<Word, SolverError> {
        if history.is_empty()
            && let Some(opener) = self.config.opening_guess
        {
            return Ok(opener);
        }

        let candidates = self.candidates(history)?;
        if self.config.hard_mode {
            let guesses = filter(self.vocabulary.guesses(), history);
            select_best(&candidates, &guesses)
        } else {
            select_best(&candidates, self.vocabulary.guesses())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn small_vocabulary() -> Vocabulary {
        Vocabulary::new(
            words(&[
                "crane", "slate", "irate", "crate", "grate", "trace", "geese", "erase", "block",
                "evade",
            ]),
            words(&["salet", "roate", "glyph"]),
        )
    }

    #[test]
    fn solves_every_answer_within_budget() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::new());

        for target in vocab.answers() {
            let solution = solver.solve(target).unwrap();
            assert!(solution.is_solved(), "failed on {target}");
            assert!(solution.guess_count() <= 6);
            assert_eq!(solution.guesses().last(), Some(target));
        }
    }

    #[test]
    fn opener_is_used_first() {
        let vocab = small_vocabulary();
        let config = SolverConfig::new().with_opening_guess(Some(w("glyph")));
        let solver = Solver::new(&vocab, config);

        let solution = solver.solve(&w("grate")).unwrap();
        assert_eq!(solution.guesses().next(), Some(&w("glyph")));
        assert!(solution.is_solved());
    }

    #[test]
    fn opener_that_is_the_target_solves_in_one() {
        let vocab = small_vocabulary();
        let config = SolverConfig::new().with_opening_guess(Some(w("crane")));
        let solution = Solver::new(&vocab, config).solve(&w("crane")).unwrap();

        assert_eq!(solution.guess_count(), 1);
        assert!(solution.steps[0].feedback.is_solved());
    }

    #[test]
    fn single_answer_is_guessed_immediately() {
        let vocab = Vocabulary::new(words(&["evade"]), words(&["salet"]));
        let config = SolverConfig::new().with_opening_guess(Some(w("salet")));
        let solution = Solver::new(&vocab, config).solve(&w("evade")).unwrap();

        // Certainty beats the opener
        assert_eq!(solution.guess_count(), 1);
    }

    #[test]
    fn candidate_counts_never_grow() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::new());
        let solution = solver.solve(&w("irate")).unwrap();

        for step in &solution.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn unknown_target_terminates() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());

        match solver.solve(&w("zzzzz")) {
            Err(SolverError::NoMatchingWords { step, .. }) => assert!(step <= 6),
            Ok(solution) => {
                assert_eq!(solution.status, SolveStatus::Exhausted);
                assert!(matches!(
                    solution.into_result(),
                    Err(SolverError::GuessBudgetExhausted { .. })
                ));
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn indistinguishable_target_not_in_answers_fails_cleanly() {
        // GRATE is not an answer, but looks exactly like CRATE/IRATE after -RATE
        let vocab = Vocabulary::new(words(&["crate", "irate"]), vec![]);
        let solver = Solver::new(&vocab, SolverConfig::new());

        assert!(matches!(
            solver.solve(&w("grate")),
            Err(SolverError::NoMatchingWords { step: 2, .. })
        ));
    }

    #[test]
    fn exhausted_budget_is_reported() {
        let vocab = small_vocabulary();
        let config = SolverConfig::new()
            .with_opening_guess(Some(w("glyph")))
            .with_max_guesses(1);
        let solution = Solver::new(&vocab, config).solve(&w("crane")).unwrap();

        assert_eq!(solution.status, SolveStatus::Exhausted);
        assert_eq!(solution.guess_count(), 1);
        assert!(matches!(
            solution.into_result(),
            Err(SolverError::GuessBudgetExhausted { max_guesses: 1, .. })
        ));
    }

    #[test]
    fn hard_mode_guesses_respect_hints() {
        let vocab = small_vocabulary();
        let config = SolverConfig::new()
            .with_opening_guess(Some(w("slate")))
            .with_hard_mode(true);
        let solution = Solver::new(&vocab, config).solve(&w("grate")).unwrap();

        assert!(solution.is_solved());
        let steps = &solution.steps;
        for (i, step) in steps.iter().enumerate().skip(1) {
            for earlier in &steps[..i] {
                assert!(earlier.feedback.matches(step.feedback.guess()));
            }
        }
    }

    #[test]
    fn next_guess_returns_opener_without_hints() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());
        assert_eq!(solver.next_guess(&[]).unwrap(), w("raise"));
    }

    #[test]
    fn next_guess_without_opener_searches() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::new());
        let guess = solver.next_guess(&[]).unwrap();
        assert!(vocab.is_allowed_guess(&guess));
        assert_eq!(solver.next_guess(&[]).unwrap(), guess);
    }

    #[test]
    fn next_guess_with_hints() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());

        let history = [Feedback::derive(&w("crate"), &w("slate"))];
        let candidates = solver.candidates(&history).unwrap();
        assert_eq!(candidates, words(&["irate", "crate", "grate"]));

        let guess = solver.next_guess(&history).unwrap();
        assert!(vocab.is_allowed_guess(&guess));
    }

    #[test]
    fn candidates_follow_history() {
        let vocab = Vocabulary::new(words(&["crate", "irate"]), vec![]);
        let solver = Solver::new(&vocab, SolverConfig::new());

        // CRATE vs IRATE: only the first letter differs, and IRATE has no c
        let history = [Feedback::derive(&w("irate"), &w("crate"))];
        assert_eq!(solver.candidates(&history).unwrap(), words(&["irate"]));
    }

    #[test]
    fn contradictory_hints_name_the_step() {
        let vocab = small_vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::new());

        let history = [
            // Leaves BLOCK
            Feedback::parse("raise", ".....").unwrap(),
            Feedback::parse("zzzzz", "ggggg").unwrap(),
        ];
        assert!(matches!(
            solver.next_guess(&history),
            Err(SolverError::NoMatchingWords { step: 2, .. })
        ));
    }
}
