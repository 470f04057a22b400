//! Game configuration

use crate::solver::{HeuristicStrategy, StrategyType};

/// Attempts each side gets per round in the standard game
pub const MAX_ATTEMPTS: u32 = 10;

/// Tunable rules for a session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Attempts allowed per side per round (default: 10)
    pub max_attempts: u32,
    /// How the computer picks its guesses
    pub strategy: StrategyType,
}

impl GameConfig {
    /// Create a config; a budget below one attempt is raised to one
    #[must_use]
    pub const fn new(max_attempts: u32, strategy: StrategyType) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            strategy,
        }
    }

    /// Score recorded for a side that runs out of attempts
    #[inline]
    #[must_use]
    pub const fn penalty(&self) -> u32 {
        self.max_attempts + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            MAX_ATTEMPTS,
            StrategyType::Heuristic(HeuristicStrategy::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_game() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.penalty(), 11);
        assert!(matches!(
            config.strategy,
            StrategyType::Heuristic(HeuristicStrategy { random_openings: 2 })
        ));
    }

    #[test]
    fn penalty_follows_max_attempts() {
        let config = GameConfig::new(6, StrategyType::default());
        assert_eq!(config.penalty(), 7);
    }

    #[test]
    fn zero_budget_is_raised_to_one() {
        let config = GameConfig::new(0, StrategyType::default());
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.penalty(), 2);
    }
}
