//! Code-breaking engine
//!
//! The candidate space, the guess selection strategies and the guesser that
//! ties them together.

mod candidates;
mod guesser;
pub mod strategy;

pub use candidates::{CandidateSet, TOTAL_CODES, all_codes};
pub use guesser::Guesser;
pub use strategy::{
    HeuristicStrategy, RandomStrategy, SequentialStrategy, Strategy, StrategyType,
};
