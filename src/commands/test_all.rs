//! Test all secrets - comprehensive guesser evaluation
//!
//! Runs the computer against every one of the 5,040 secrets and generates
//! statistics.

use super::solve::play_against;
use crate::core::Code;
use crate::solver::{StrategyType, all_codes};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub attempt_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_attempts: f64,
    pub max_attempts: usize,
    pub min_attempts: usize,
    pub hardest_secrets: Vec<(Code, usize)>,
    pub failed_secrets: Vec<Code>,
}

/// Run the guesser on every secret (or the first `limit` of them)
///
/// Games run in parallel. Each secret gets its own generator derived from
/// `seed` and its index, so results do not depend on thread scheduling.
pub fn run_test_all(
    strategy: &StrategyType,
    max_attempts: u32,
    limit: Option<usize>,
    seed: u64,
) -> TestAllStatistics {
    let secrets: Vec<(usize, Code)> = all_codes()
        .iter()
        .copied()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());
    info!(count = secrets.len(), seed, "Testing all secrets");

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|&(idx, secret)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
            let result = play_against(secret, strategy, max_attempts, &mut rng);
            pb.inc(1);
            SecretTestResult {
                secret,
                guesses: result.guesses.iter().map(|step| step.guess).collect(),
                success: result.success,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let mut attempt_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *attempt_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved_attempts: Vec<usize> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .collect();
    let solved = solved_attempts.len();

    let average_attempts = if solved > 0 {
        solved_attempts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_secrets: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest_secrets.sort_by_key(|&(secret, n)| (std::cmp::Reverse(n), secret));
    hardest_secrets.truncate(10);

    let failed_secrets: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret)
        .collect();

    TestAllStatistics {
        total_secrets: results.len(),
        solved,
        failed: failed_secrets.len(),
        attempt_distribution,
        total_time,
        average_attempts,
        max_attempts: solved_attempts.iter().copied().max().unwrap_or(0),
        min_attempts: solved_attempts.iter().copied().min().unwrap_or(0),
        hardest_secrets,
        failed_secrets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_secrets.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average attempts:     {}",
        format!("{:.3}", stats.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:         {} / {}",
        stats.min_attempts, stats.max_attempts
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Attempt Distribution".bright_cyan().bold());
    let max_count = stats
        .attempt_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    let mut rows: Vec<(usize, usize)> = stats
        .attempt_distribution
        .iter()
        .map(|(&k, &v)| (k, v))
        .collect();
    rows.sort_unstable();
    for (attempts, count) in rows {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {attempts:2} attempts: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, attempts) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({attempts} attempts)", secret.to_string().yellow());
        }
    }

    if !stats.failed_secrets.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        let listed: Vec<String> = stats
            .failed_secrets
            .iter()
            .take(20)
            .map(ToString::to_string)
            .collect();
        println!("  {}", listed.join(" "));
    }
}
