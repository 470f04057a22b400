//! Terminal output formatting
//!
//! Display utilities for CLI results, game events and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    describe_event, format_score_table, print_analysis_result, print_benchmark_result,
    print_score_table, print_solve_result, styled_event,
};
