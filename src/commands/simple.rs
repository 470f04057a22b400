//! Simple interactive CLI mode
//!
//! Text-based duel without the TUI

use crate::game::{GameError, GameEvent, Phase, Session, TrackState};
use crate::output::{format_score_table, print_score_table, styled_event};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// What the player typed, after commands are recognised
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Scores,
    Text(String),
}

fn classify(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        "scores" | "s" => Input::Scores,
        other => Input::Text(other.to_string()),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Dead & Injured - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess my 4-digit number (all digits different), then I guess yours.");
    println!("  - Dead: right digit in the right place");
    println!("  - Injured: right digit in the wrong place");
    println!("  - When I guess, answer with dead and injured, e.g. '1 2'\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'scores' for the table\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let consumed = play(session, &mut lines, &mut io::stdout())?;
    debug!(lines = consumed, "Simple mode finished");

    print_score_table(&session.score_table());
    println!("👋 Thanks for playing!\n");
    Ok(())
}

/// Drive the session from `input` until quit or end of input
///
/// Returns the number of lines consumed.
fn play<R: Rng, I: BufRead, W: Write>(
    session: &mut Session<R>,
    input: &mut I,
    out: &mut W,
) -> io::Result<usize> {
    let mut consumed = 0;

    loop {
        let prompt = match session.phase() {
            Phase::HumanGuessing => format!(
                "Round {} - your guess #{}",
                session.round_number(),
                attempts_used(session) + 1
            ),
            Phase::AwaitingSecret => "Your secret (empty line cancels)".to_string(),
            Phase::ComputerGuessing => match session.pending_guess() {
                Some((attempt, guess)) => {
                    format!("My guess #{attempt} is {guess} - dead and injured?")
                }
                None => "Dead and injured?".to_string(),
            },
        };

        write!(out, "{prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(consumed);
        }
        consumed += 1;

        let result = match classify(&line) {
            Input::Quit => return Ok(consumed),
            Input::NewGame => Ok(session.restart()),
            Input::Scores => {
                writeln!(out, "{}", format_score_table(&session.score_table()))?;
                continue;
            }
            Input::Text(text) => submit(session, &text),
        };

        match result {
            Ok(events) => {
                for event in &events {
                    writeln!(out, "{}", styled_event(event))?;
                }
                trace!(events = events.len(), "Input applied");
            }
            Err(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
        }
    }
}

fn submit<R: Rng>(
    session: &mut Session<R>,
    text: &str,
) -> Result<Vec<GameEvent>, GameError> {
    match session.phase() {
        Phase::HumanGuessing => session.submit_guess(text),
        Phase::AwaitingSecret if text.is_empty() => session.cancel_secret(),
        Phase::AwaitingSecret => session.submit_secret(text),
        Phase::ComputerGuessing => session.submit_feedback_text(text),
    }
}

fn attempts_used<R: Rng>(session: &Session<R>) -> u32 {
    match session.human_track() {
        TrackState::InProgress(n) | TrackState::Solved(n) => n,
        TrackState::Failed => session.config().max_attempts,
    }
}
