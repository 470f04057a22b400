//! Game rounds and sessions
//!
//! Turns the engine into a two-sided duel: attempt counting, win and timeout
//! detection, score keeping and the phase machine the interfaces drive.

mod config;
mod session;
mod track;

pub use config::{GameConfig, MAX_ATTEMPTS};
pub use session::{Action, GameError, GameEvent, Phase, RoundScore, Session};
pub use track::{Side, TrackState};
