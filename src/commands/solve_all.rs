//! Solve every answer word
//!
//! Produces one results record per solved answer, in answer-list order. This
//! is the slow path: each solve runs the full guess search several times.

use super::stats::ResultsRecord;
use crate::core::{SolverError, Word};
use crate::solver::{Solution, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io;
use std::time::{Duration, Instant};

/// Targets solved per worker thread before records are emitted
const TARGETS_PER_THREAD: usize = 4;

/// Everything produced by a solve-all run
#[derive(Debug)]
pub struct SolveAllSummary {
    /// One record per solved answer, in answer-list order
    pub records: Vec<ResultsRecord>,
    /// Answers that could not be solved, with the reason
    pub failures: Vec<(Word, SolverError)>,
    pub total_time: Duration,
}

/// Run the solver against every answer (or the first `limit` of them)
///
/// Targets are solved in parallel, a batch at a time. After each batch its
/// records are handed to `on_record` in answer-list order, so a run that is
/// interrupted still leaves every finished record behind. A progress bar is
/// drawn on stderr when `show_progress` is set.
///
/// # Errors
///
/// Returns `Io` if `on_record` fails; the run stops there.
pub fn run_solve_all<F>(
    solver: &Solver<'_>,
    limit: Option<usize>,
    show_progress: bool,
    mut on_record: F,
) -> Result<SolveAllSummary, SolverError>
where
    F: FnMut(&ResultsRecord) -> io::Result<()>,
{
    let answers = solver.vocabulary().answers();
    let targets = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut records = Vec::with_capacity(targets.len());
    let mut failures = Vec::new();
    let batch_size = rayon::current_num_threads().max(1) * TARGETS_PER_THREAD;

    for batch in targets.chunks(batch_size) {
        let outcomes: Vec<(Word, Result<usize, SolverError>)> = batch
            .par_iter()
            .map(|target| {
                let outcome = solver
                    .solve(target)
                    .and_then(Solution::into_result)
                    .map(|solution| solution.guess_count());
                pb.inc(1);
                (*target, outcome)
            })
            .collect();

        for (target, outcome) in outcomes {
            match outcome {
                Ok(guesses) => {
                    let record = ResultsRecord {
                        answer: target,
                        guesses,
                    };
                    on_record(&record)?;
                    records.push(record);
                }
                Err(e) => {
                    log::warn!("Skipping {target}: {e}");
                    failures.push((target, e));
                }
            }
        }
    }
    pb.finish_and_clear();

    Ok(SolveAllSummary {
        records,
        failures,
        total_time: start.elapsed(),
    })
}
