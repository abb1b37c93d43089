//! Candidate pool filtering

use crate::core::{Feedback, Word};

/// Words from `pool` consistent with every feedback in `feedback`
///
/// Stable: survivors keep their input order. The input is never modified.
/// With no feedback at all every word survives.
///
/// # Examples
/// ```
/// use wordler::core::{Feedback, Word};
/// use wordler::solver::filter;
///
/// let pool: Vec<Word> = ["crane", "slate", "block"]
///     .iter()
///     .map(|s| Word::new(s).unwrap())
///     .collect();
/// let fb = Feedback::parse("raise", ".....").unwrap();
///
/// assert_eq!(filter(&pool, &[fb]), vec![Word::new("block").unwrap()]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], feedback: &[Feedback]) -> Vec<Word> {
    pool.iter()
        .filter(|word| feedback.iter().all(|fb| fb.matches(word)))
        .copied()
        .collect()
}
