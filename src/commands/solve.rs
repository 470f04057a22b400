//! Secret solving command
//!
//! Lets the computer crack a known secret and records every step. The same
//! self-play loop backs the benchmark and test-all commands.

use crate::core::{Code, CodeError, Feedback};
use crate::game::MAX_ATTEMPTS;
use crate::solver::{Guesser, StrategyType};
use rand::Rng;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_attempts: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

impl SolveResult {
    /// Attempts used, whether or not the secret was found
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve the secret named in `config`
///
/// # Errors
///
/// Returns an error if the secret is not a valid code.
pub fn solve_secret<R: Rng + ?Sized>(
    config: &SolveConfig,
    strategy: &StrategyType,
    rng: &mut R,
) -> Result<SolveResult, CodeError> {
    let secret = Code::parse(&config.secret)?;
    Ok(play_against(secret, strategy, config.max_attempts, rng))
}

/// Let a fresh guesser play against `secret` with honest feedback
pub fn play_against<R: Rng + ?Sized>(
    secret: Code,
    strategy: &StrategyType,
    max_attempts: u32,
    rng: &mut R,
) -> SolveResult {
    let mut guesser = Guesser::new(strategy.clone());
    let mut guesses = Vec::new();

    while guesser.attempts() < max_attempts {
        let candidates_before = guesser.candidates().len();
        let guess = guesser.next_guess(rng);
        let feedback = Feedback::calculate(&guess, &secret);

        if feedback.is_solved() {
            guesses.push(GuessStep {
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            return SolveResult {
                success: true,
                guesses,
                secret,
            };
        }

        guesser.apply_feedback(feedback);
        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: guesser.candidates().len(),
        });
    }

    SolveResult {
        success: false,
        guesses,
        secret,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SequentialStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_secret_succeeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SolveConfig::new("5831".to_string());

        let result = solve_secret(&config, &StrategyType::default(), &mut rng).unwrap();

        assert!(result.success);
        assert!(result.attempts() <= 10);
        assert_eq!(result.guesses.last().map(|s| s.guess), Some(result.secret));
    }

    #[test]
    fn solve_records_history() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = SolveConfig::new("0692".to_string());

        let result = solve_secret(&config, &StrategyType::default(), &mut rng).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(step.feedback, Feedback::calculate(&step.guess, &result.secret));
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = SolveConfig::new("1123".to_string());

        let result = solve_secret(&config, &StrategyType::default(), &mut rng);

        assert!(matches!(result, Err(CodeError::DuplicateDigit(1))));
    }

    #[test]
    fn first_code_is_solved_in_one_sequentially() {
        let mut rng = StdRng::seed_from_u64(4);
        let secret = Code::parse("0123").unwrap();
        let strategy = StrategyType::Sequential(SequentialStrategy);

        let result = play_against(secret, &strategy, MAX_ATTEMPTS, &mut rng);

        assert!(result.success);
        assert_eq!(result.attempts(), 1);
    }

    #[test]
    fn attempt_budget_is_respected() {
        let mut rng = StdRng::seed_from_u64(5);
        let secret = Code::parse("9876").unwrap();
        let strategy = StrategyType::Sequential(SequentialStrategy);

        let result = play_against(secret, &strategy, 2, &mut rng);

        assert!(!result.success);
        assert_eq!(result.attempts(), 2);
    }
}
