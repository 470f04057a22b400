//! One side's guessing phase within a round

use crate::core::Feedback;
use std::fmt;

/// Which player is guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The person at the keyboard, guessing the computer's code
    Human,
    /// The engine, guessing the human's code
    Computer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "You"),
            Self::Computer => write!(f, "Computer"),
        }
    }
}

/// Progress of one side's track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// Still guessing, with this many attempts used
    InProgress(u32),
    /// Found the code on this attempt
    Solved(u32),
    /// Used every attempt without finding the code
    Failed,
}

impl TrackState {
    /// A track with no attempts used
    pub const START: Self = Self::InProgress(0);

    /// Record one scored attempt
    ///
    /// Resolved tracks are returned unchanged.
    #[must_use]
    pub const fn record(self, feedback: Feedback, max_attempts: u32) -> Self {
        match self {
            Self::InProgress(used) => {
                let attempts = used + 1;
                if feedback.is_solved() {
                    Self::Solved(attempts)
                } else if attempts >= max_attempts {
                    Self::Failed
                } else {
                    Self::InProgress(attempts)
                }
            }
            resolved => resolved,
        }
    }

    /// True once the track is solved or failed
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::InProgress(_))
    }

    /// Round score: attempts taken, or `penalty` when failed
    ///
    /// `None` while the track is still running.
    #[must_use]
    pub const fn score(self, penalty: u32) -> Option<u32> {
        match self {
            Self::InProgress(_) => None,
            Self::Solved(attempts) => Some(attempts),
            Self::Failed => Some(penalty),
        }
    }
}

impl Default for TrackState {
    fn default() -> Self {
        Self::START
    }
}
