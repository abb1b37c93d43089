//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_derived_hint, print_filtered_answers, print_match_results, print_next_guess,
    print_results_stats, print_solve_all_summary, print_solve_report,
};
