//! Wordler - CLI
//!
//! Given a series of hints, compute which word to guess next. Also solves
//! given answers, solves every answer for a results file, summarizes results
//! files, and plays games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordler::{
    commands::{
        ResultsStats, derive_hint, filter_answers, load_results, match_words, play_game,
        random_target, run_solve_all, solve_word, suggest_next,
    },
    core::Word,
    output::{
        print_derived_hint, print_filtered_answers, print_match_results, print_next_guess,
        print_results_stats, print_solve_all_summary, print_solve_report,
    },
    solver::{DEFAULT_OPENER, Solver, SolverConfig, Vocabulary},
    wordlists::{ANSWERS, EXTRA_GUESSES, loader},
};

#[derive(Parser)]
#[command(
    name = "wordler",
    about = "Wordle solver - given a series of hints, compute which word to guess next",
    after_help = "Example: wordler raise y.gy. thumb yg...\n\n\
                  Hints use 'g' for green, 'y' for yellow and '.' for grey.\n\
                  A guess spelled like a command (e.g. \"match\") needs `next` in front.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Alternating guess words and hints, as for `next`
    hints: Vec<String>,

    /// Initial guess word; pass "" to compute it from scratch (slow)
    #[arg(short, long, global = true, default_value = DEFAULT_OPENER)]
    init: String,

    /// Hard mode - guesses must match hints
    #[arg(short = 'd', long, global = true)]
    hard: bool,

    /// Print only the essential result
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Answer word list file, one word per line (default: built in)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Additional guess word list file (default: built in)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess from guess/hint pairs (default)
    Next {
        /// Alternating guess words and hints, e.g. raise y.gy.
        hints: Vec<String>,
    },

    /// Play a game against a random answer
    Play,

    /// Solve for the given answers
    Solve {
        /// Target words to solve
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Solve every answer and print "word, guesses" lines - slow!
    All {
        /// Only solve the first N answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Display stats from a results file produced by `all`
    Stats {
        /// Results file (default: stdin)
        file: Option<PathBuf>,
    },

    /// Check words against a single guess/hint pair
    Match {
        guess: String,
        hint: String,
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every answer that matches the given guess/hint pairs
    Filter {
        /// Alternating guess words and hints
        hints: Vec<String>,
    },

    /// Show the hint a guess receives against a target
    Derive { target: String, guess: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let verbose = !cli.quiet;

    let vocabulary = load_vocabulary(cli.answers.as_deref(), cli.guesses.as_deref())?;
    let config = build_config(&cli.init, cli.hard)?;
    let solver = Solver::new(&vocabulary, config);

    let command = match cli.command {
        Some(_) if !cli.hints.is_empty() => {
            bail!("hints cannot be combined with a command: {}", cli.hints.join(" "))
        }
        Some(command) => command,
        None => Commands::Next { hints: cli.hints },
    };

    match command {
        Commands::Next { hints } => {
            let next = suggest_next(&solver, &hints)?;
            print_next_guess(&next, verbose);
        }
        Commands::Play => run_play_command(&solver, verbose)?,
        Commands::Solve { words } => {
            for word in &words {
                let report =
                    solve_word(&solver, word).with_context(|| format!("solving \"{word}\""))?;
                print_solve_report(&report, verbose);
            }
        }
        Commands::All { limit } => {
            let mut out = io::stdout().lock();
            let summary = run_solve_all(&solver, limit, verbose, |record| {
                writeln!(out, "{record}")?;
                out.flush()
            })?;
            if verbose || !summary.failures.is_empty() {
                print_solve_all_summary(&summary);
            }
        }
        Commands::Stats { file } => {
            let records = load_results(file.as_deref()).context("loading results")?;
            print_results_stats(records.len(), ResultsStats::from_records(&records).as_ref());
        }
        Commands::Match { guess, hint, words } => {
            let results = match_words(&guess, &hint, &words)?;
            print_match_results(&format!("{guess} {hint}"), &results, verbose);
        }
        Commands::Filter { hints } => {
            let matches = filter_answers(&vocabulary, &hints)?;
            print_filtered_answers(&matches, verbose);
        }
        Commands::Derive { target, guess } => {
            let feedback = derive_hint(&target, &guess)?;
            print_derived_hint(&Word::new(&target)?, &feedback, verbose);
        }
    }

    Ok(())
}

/// Build the vocabulary from files where given, embedded lists otherwise
fn load_vocabulary(answers: Option<&Path>, guesses: Option<&Path>) -> Result<Vocabulary> {
    let answers = match answers {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("loading answers from {}", path.display()))?,
        None => loader::words_from_slice(ANSWERS)?,
    };
    let extra = match guesses {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("loading guesses from {}", path.display()))?,
        None => loader::words_from_slice(EXTRA_GUESSES)?,
    };
    Ok(Vocabulary::new(answers, extra))
}

fn build_config(init: &str, hard: bool) -> Result<SolverConfig> {
    let opening_guess = if init.is_empty() {
        None
    } else {
        Some(Word::new(init).context("invalid --init word")?)
    };
    Ok(SolverConfig::new()
        .with_opening_guess(opening_guess)
        .with_hard_mode(hard))
}

fn run_play_command(solver: &Solver<'_>, verbose: bool) -> Result<()> {
    let vocabulary = solver.vocabulary();
    let target = random_target(vocabulary, &mut rand::rng()).context("answer list is empty")?;
    log::debug!("Playing with hidden word {target}");

    play_game(
        vocabulary,
        solver.config(),
        target,
        io::stdin().lock(),
        io::stdout(),
        verbose,
    )?;
    Ok(())
}
