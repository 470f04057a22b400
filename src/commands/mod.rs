//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, random_secrets, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, play_against, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
