//! Automated guesser
//!
//! Owns the candidate space for one round, issues guesses and narrows the
//! candidates from the feedback the opponent reports.

use super::strategy::{Strategy, StrategyType};
use super::CandidateSet;
use crate::core::{Code, Feedback};
use rand::Rng;
use tracing::{debug, warn};

/// Computer player that cracks the opponent's code
///
/// Win and timeout detection belong to the caller; the guesser only supplies
/// guesses and shrinks its candidates.
#[derive(Debug, Clone)]
pub struct Guesser<S: Strategy = StrategyType> {
    strategy: S,
    candidates: CandidateSet,
    attempts: u32,
    last_guess: Option<Code>,
}

impl<S: Strategy> Guesser<S> {
    /// Create a guesser over the full candidate space
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            candidates: CandidateSet::all(),
            attempts: 0,
            last_guess: None,
        }
    }

    /// Issue the next guess, counting it as one attempt
    ///
    /// If contradictory feedback has emptied the candidate space, falls back
    /// to a fresh random code. That guess is valid but may not agree with
    /// earlier feedback.
    pub fn next_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Code {
        self.attempts += 1;

        let guess = self
            .strategy
            .select_guess(self.attempts, &self.candidates, rng)
            .unwrap_or_else(|| {
                warn!(
                    attempt = self.attempts,
                    "No candidates remain, feedback was inconsistent; guessing at random"
                );
                Code::random(rng)
            });

        debug!(
            attempt = self.attempts,
            guess = %guess,
            candidates = self.candidates.len(),
            "Guess issued"
        );

        self.last_guess = Some(guess);
        guess
    }

    /// Narrow the candidates with feedback for the last guess
    ///
    /// Does nothing if no guess has been issued yet.
    pub fn apply_feedback(&mut self, feedback: Feedback) {
        let Some(guess) = self.last_guess else {
            return;
        };

        let before = self.candidates.len();
        self.candidates.narrow(&guess, feedback);

        debug!(
            guess = %guess,
            feedback = %feedback,
            before,
            after = self.candidates.len(),
            "Candidates filtered"
        );
        if before > 0 && self.candidates.is_empty() {
            warn!(guess = %guess, feedback = %feedback, "Feedback contradicts earlier answers");
        }
    }

    /// Number of guesses issued so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The most recent guess, if any
    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<Code> {
        self.last_guess
    }

    /// Remaining candidates
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}

impl Default for Guesser<StrategyType> {
    fn default() -> Self {
        Self::new(StrategyType::default())
    }
}
