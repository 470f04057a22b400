//! Dead & Injured
//!
//! A two-sided code-breaking duel over 4-digit codes with distinct digits.
//! The player guesses the computer's number, then the computer guesses the
//! player's, narrowing 5,040 candidates with every piece of feedback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dead_injured::core::{Code, Feedback};
//!
//! let guess = Code::parse("1243").unwrap();
//! let secret = Code::parse("1234").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! println!("{feedback}"); // Dead: 2 Injured: 2
//! ```

// Core domain types
pub mod core;

// Candidate space and guess selection
pub mod solver;

// Rounds, scoring and the session phase machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
