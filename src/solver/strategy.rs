//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::CandidateSet;
use crate::core::Code;
use rand::Rng;

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess for the given 1-based attempt
    ///
    /// Returns `None` if no candidate remains.
    fn select_guess<R: Rng + ?Sized>(
        &self,
        attempt: u32,
        candidates: &CandidateSet,
        rng: &mut R,
    ) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Random openings, then first candidate (default)
    Heuristic(HeuristicStrategy),
    /// Always the first candidate
    Sequential(SequentialStrategy),
    /// Always a random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        attempt: u32,
        candidates: &CandidateSet,
        rng: &mut R,
    ) -> Option<Code> {
        match self {
            Self::Heuristic(s) => s.select_guess(attempt, candidates, rng),
            Self::Sequential(s) => s.select_guess(attempt, candidates, rng),
            Self::Random(s) => s.select_guess(attempt, candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "heuristic", "sequential", "random".
    /// Defaults to heuristic if name is unrecognized; `random_openings` only
    /// applies to the heuristic.
    #[must_use]
    pub fn from_name(name: &str, random_openings: u32) -> Self {
        match name {
            "sequential" | "first" => Self::Sequential(SequentialStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Heuristic(HeuristicStrategy::new(random_openings)),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Heuristic(HeuristicStrategy::default())
    }
}

/// Random picks for the opening attempts, then the first candidate
///
/// The random openings keep the computer from replaying the same game
/// every time; after them it exploits whatever it has learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicStrategy {
    /// Attempts 1..=this pick uniformly at random (default: 2)
    pub random_openings: u32,
}

impl HeuristicStrategy {
    #[must_use]
    pub const fn new(random_openings: u32) -> Self {
        Self { random_openings }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Strategy for HeuristicStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        attempt: u32,
        candidates: &CandidateSet,
        rng: &mut R,
    ) -> Option<Code> {
        if attempt <= self.random_openings {
            candidates.choose(rng)
        } else {
            candidates.first()
        }
    }
}

/// Deterministic: always the first remaining candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialStrategy;

impl Strategy for SequentialStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        _attempt: u32,
        candidates: &CandidateSet,
        _rng: &mut R,
    ) -> Option<Code> {
        candidates.first()
    }
}

/// Uniformly random remaining candidate on every attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        _attempt: u32,
        candidates: &CandidateSet,
        rng: &mut R,
    ) -> Option<Code> {
        candidates.choose(rng)
    }
}
