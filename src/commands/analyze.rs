//! Guess analysis command
//!
//! Shows how a guess would split the full candidate space by feedback.

use crate::core::{Code, CodeError, Feedback};
use crate::solver::CandidateSet;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    /// Feedback buckets, largest first
    pub buckets: Vec<(Feedback, usize)>,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Partition every possible secret by the feedback `guess` would receive
///
/// # Errors
///
/// Returns an error if the guess is not a valid code.
pub fn analyze_guess(guess: &str) -> Result<AnalysisResult, CodeError> {
    let guess = Code::parse(guess)?;
    let candidates = CandidateSet::all();

    let mut buckets: Vec<(Feedback, usize)> = candidates.partition(&guess).into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    let total_candidates = candidates.len();
    // A secret in a bucket of size n leaves n candidates: E = Σ n² / N
    let expected_remaining = buckets
        .iter()
        .map(|&(_, n)| (n * n) as f64)
        .sum::<f64>()
        / total_candidates as f64;
    let max_partition = buckets.first().map_or(0, |&(_, n)| n);

    Ok(AnalysisResult {
        guess,
        buckets,
        expected_remaining,
        max_partition,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TOTAL_CODES;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("0123").unwrap();

        assert_eq!(result.total_candidates, TOTAL_CODES);
        assert_eq!(
            result.buckets.iter().map(|&(_, n)| n).sum::<usize>(),
            TOTAL_CODES
        );
        // Every opening splits the space identically; 0 dead 1 injured is largest
        assert_eq!(result.max_partition, 1440);
        assert_eq!(result.buckets[0].0, Feedback::new(0, 1).unwrap());
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(matches!(
            analyze_guess("12"),
            Err(CodeError::WrongLength(2))
        ));
        assert!(analyze_guess("1223").is_err());
    }

    #[test]
    fn expected_remaining_is_bounded() {
        let result = analyze_guess("9517").unwrap();

        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.max_partition as f64);
    }

    #[test]
    fn all_openings_split_alike() {
        let a = analyze_guess("0123").unwrap();
        let b = analyze_guess("8642").unwrap();
        assert!((a.expected_remaining - b.expected_remaining).abs() < 1e-9);
    }
}
