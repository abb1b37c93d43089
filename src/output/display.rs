//! Display functions for command results
//!
//! Verbose output is for people; quiet output prints just the answer so it can
//! be piped.

use super::formatters::{colored_feedback, create_bar, format_seconds};
use crate::commands::{NextGuess, ResultsStats, SolveAllSummary, SolveReport};
use crate::core::{Feedback, Word};
use colored::Colorize;

/// Print a suggested next guess
pub fn print_next_guess(next: &NextGuess, verbose: bool) {
    if !verbose {
        println!("{}", next.guess);
    } else if next.is_opener {
        println!("First guess is \"{}\"", next.guess.to_string().bright_yellow());
    } else {
        println!("Time: {} seconds", format_seconds(next.elapsed));
        println!(
            "Best guess is \"{}\"",
            next.guess.to_string().bright_yellow().bold()
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let solution = &report.solution;

    if verbose {
        println!("Target: \"{}\"", solution.target.to_string().bright_yellow());
    }
    for (i, step) in solution.steps.iter().enumerate() {
        if verbose {
            println!(
                "Guess #{} is \"{}\" {}  {} → {} candidates",
                i + 1,
                step.feedback.guess(),
                colored_feedback(&step.feedback),
                step.candidates_before,
                step.candidates_after
            );
        } else {
            println!("{}", step.feedback.guess());
        }
    }
    if verbose {
        println!("Time: {} seconds", format_seconds(report.elapsed));
        println!(
            "{}",
            format!(
                "Answer: \"{}\" in {} tries",
                solution.target,
                solution.guess_count()
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", solution.guess_count());
    }
}

/// Report how a solve-all run went, on stderr so stdout stays a results file
pub fn print_solve_all_summary(summary: &SolveAllSummary) {
    eprintln!(
        "{} solved, {} failed in {} seconds",
        summary.records.len().to_string().green(),
        summary.failures.len().to_string().red(),
        format_seconds(summary.total_time)
    );
    for (word, error) in &summary.failures {
        eprintln!("  {}: {error}", word.to_string().red());
    }
}

/// Print results-file statistics
pub fn print_results_stats(count: usize, stats: Option<&ResultsStats>) {
    println!("Number of results: {count}");
    let Some(stats) = stats else {
        return;
    };

    println!(
        "Min guesses: {} for \"{}\"",
        stats.min.guesses, stats.min.answer
    );
    println!(
        "Max guesses: {} for e.g. \"{}\"",
        stats.max.guesses, stats.max.answer
    );
    println!(
        "Mean guesses: {}",
        format!("{:.2}", stats.mean).bright_yellow().bold()
    );
    println!("Histogram stats:");
    let tallest = stats.histogram.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.histogram.iter().enumerate() {
        println!(
            "{guesses}, {count}  {}",
            create_bar(count, tallest, 40).green()
        );
    }
}

/// Print which words fit a hint
pub fn print_match_results(feedback_text: &str, results: &[(Word, bool)], verbose: bool) {
    if verbose {
        println!("hint: {feedback_text}");
    }
    for (word, matched) in results {
        println!("{word} {matched}");
    }
}

/// Print answers remaining after some hints
pub fn print_filtered_answers(matches: &[Word], verbose: bool) {
    if verbose {
        println!("{} matches", matches.len());
    } else {
        println!("{}", matches.len());
    }
    let words: Vec<String> = matches.iter().map(Word::text).collect();
    println!("{}", words.join(" "));
}

/// Print a derived hint
pub fn print_derived_hint(target: &Word, feedback: &Feedback, verbose: bool) {
    if verbose {
        println!("Target: {target} Guess: {}", feedback.guess());
        println!("{feedback}  {}", colored_feedback(feedback));
    } else {
        println!("{feedback}");
    }
}
