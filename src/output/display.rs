//! Display functions for command results and game events

use super::formatters::{create_progress_bar, feedback_pegs, score_cell};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::{GameEvent, RoundScore, Side, TrackState};
use colored::{ColoredString, Colorize};

/// One-line description of a game event
#[must_use]
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GuessScored {
            side,
            attempt,
            guess,
            feedback,
        } => format!(
            "{side} #{attempt}: {guess} {} {feedback}",
            feedback_pegs(*feedback)
        ),
        GameEvent::TrackResolved {
            side: Side::Human,
            state: TrackState::Solved(n),
            ..
        } => format!("You found the number in {n} attempts!"),
        GameEvent::TrackResolved {
            side: Side::Human,
            secret,
            ..
        } => format!("You didn't find the number! It was {secret}"),
        GameEvent::TrackResolved {
            side: Side::Computer,
            state: TrackState::Solved(n),
            ..
        } => format!("Computer found your number in {n} attempts!"),
        GameEvent::TrackResolved {
            side: Side::Computer,
            ..
        } => "Computer didn't find your number!".to_string(),
        GameEvent::SecretRequested => {
            "Enter your 4-digit secret for the computer to guess (all digits unique)".to_string()
        }
        GameEvent::ComputerGuessed { attempt, guess } => {
            format!("Computer guess #{attempt}: {guess}")
        }
        GameEvent::RoundCompleted(score) => format!(
            "Round {} over: you {}, computer {}",
            score.round,
            score_cell(score.human),
            score_cell(score.computer)
        ),
        GameEvent::RoundStarted { round } => format!("Round {round}: your turn to guess"),
        GameEvent::SessionRestarted => "New game started".to_string(),
    }
}

/// Game event description colored by outcome
#[must_use]
pub fn styled_event(event: &GameEvent) -> ColoredString {
    let line = describe_event(event);
    match event {
        GameEvent::TrackResolved {
            state: TrackState::Solved(_),
            ..
        } => line.green().bold(),
        GameEvent::TrackResolved { .. } => line.red().bold(),
        GameEvent::RoundCompleted(_) | GameEvent::RoundStarted { .. } => line.bright_cyan(),
        GameEvent::ComputerGuessed { .. } => line.bright_yellow().bold(),
        _ => line.normal(),
    }
}

/// Render the score table as text
#[must_use]
pub fn format_score_table(rows: &[RoundScore]) -> String {
    let mut table = format!(
        "\n  {:>5}  {:>6}  {:>8}\n  {}\n",
        "Round",
        "You",
        "Computer",
        "─".repeat(23).bright_black()
    );
    for row in rows {
        table.push_str(&format!(
            "  {:>5}  {:>6}  {:>8}\n",
            row.round,
            score_cell(row.human),
            score_cell(row.computer)
        ));
    }
    table
}

/// Print the score table
pub fn print_score_table(rows: &[RoundScore]) {
    println!("{}", format_score_table(rows));
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nAttempt {}: {} {} ({}, {})",
            i + 1,
            step.guess,
            feedback_pegs(step.feedback),
            step.feedback.dead(),
            step.feedback.injured()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} attempts!", result.attempts())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} attempts", result.attempts())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Expected:    {} candidates remain",
        format!("{:.1}", result.expected_remaining).bright_yellow()
    );
    println!("   Worst case:  {} candidates", result.max_partition);

    println!("\n📈 {}", "Feedback buckets:".bright_cyan().bold());
    for (feedback, count) in &result.buckets {
        let bar = create_progress_bar(*count as f64, result.max_partition as f64, 30);
        println!(
            "   {} {}D {}I [{}] {count:5}",
            feedback_pegs(*feedback),
            feedback.dead(),
            feedback.injured(),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    println!("   Solved:           {}", result.solved);
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rows: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    rows.sort_unstable();
    for (attempts, count) in rows {
        let pct = (count as f64 / result.solved.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {attempts:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
