//! Benchmark command
//!
//! Measures the computer's performance over a batch of secrets.

use super::solve::play_against;
use crate::core::Code;
use crate::solver::StrategyType;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Draw `count` random secrets
pub fn random_secrets<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Code> {
    (0..count).map(|_| Code::random(rng)).collect()
}

/// Run the computer against each secret in turn
///
/// Averages and extremes cover solved games only; failures are counted
/// separately.
pub fn run_benchmark<R: Rng + ?Sized>(
    strategy: &StrategyType,
    secrets: &[Code],
    max_attempts: u32,
    rng: &mut R,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_attempts = 0;
    let mut solved = 0;
    let mut min_attempts = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &secret in secrets {
        let result = play_against(secret, strategy, max_attempts, rng);
        if !result.success {
            continue;
        }

        let attempts = result.attempts();
        solved += 1;
        total_attempts += attempts;
        min_attempts = min_attempts.min(attempts);
        max_seen = max_seen.max(attempts);
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    BenchmarkResult {
        total_secrets,
        solved,
        failed: total_secrets - solved,
        average_attempts: if solved > 0 {
            total_attempts as f64 / solved as f64
        } else {
            0.0
        },
        min_attempts: if solved > 0 { min_attempts } else { 0 },
        max_attempts: max_seen,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
