//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};

/// Format feedback as pegs: ● dead, ○ injured, · miss
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let dead = usize::from(feedback.dead());
    let injured = usize::from(feedback.injured());
    let misses = CODE_LENGTH.saturating_sub(dead + injured);

    format!("{}{}{}", "●".repeat(dead), "○".repeat(injured), "·".repeat(misses))
}

/// Score table cell: the score, or '-' while unresolved
#[must_use]
pub fn score_cell(score: Option<u32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_feedback() {
        let pegs = feedback_pegs(Feedback::new(1, 2).unwrap());
        assert_eq!(pegs, "●○○·");
    }

    #[test]
    fn pegs_for_no_match() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0).unwrap()), "····");
    }

    #[test]
    fn pegs_for_solved() {
        assert_eq!(feedback_pegs(Feedback::SOLVED), "●●●●");
    }

    #[test]
    fn score_cell_shows_dash_when_unresolved() {
        assert_eq!(score_cell(None), "-");
        assert_eq!(score_cell(Some(11)), "11");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
