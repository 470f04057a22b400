//! Core domain types for Dead/Injured
//!
//! This module contains the fundamental value types: the four-digit code and
//! the dead/injured feedback computed between two codes. Everything here is
//! pure and deterministic apart from drawing a random code from an injected
//! generator.

mod code;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{Feedback, FeedbackError};
