//! Dead/Injured feedback calculation and representation
//!
//! Feedback counts two kinds of match between a guess and a secret:
//! - dead: right digit in the right position
//! - injured: right digit in the wrong position
//!
//! Because codes never repeat a digit, `dead + injured` is exactly the number
//! of digits the two codes share.

use super::Code;
use super::code::CODE_LENGTH;
use std::fmt;
use std::str::FromStr;

/// Result of scoring one code against another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    dead: u8,
    injured: u8,
}

/// Error type for feedback that cannot occur
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Negative counts, or more matches than there are digits
    InvalidFeedback { dead: i64, injured: i64 },
    /// Text that does not read as two counts
    Malformed(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedback { dead, injured } => write!(
                f,
                "Invalid feedback ({dead} dead, {injured} injured): counts must be \
                 non-negative and add up to at most {CODE_LENGTH}"
            ),
            Self::Malformed(text) => write!(
                f,
                "Could not read feedback '{text}', enter dead and injured like '1 2'"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Four dead: the guess is the secret
    pub const SOLVED: Self = Self {
        dead: CODE_LENGTH as u8,
        injured: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidFeedback` if either count is negative or
    /// their sum exceeds 4.
    ///
    /// # Examples
    /// ```
    /// use dead_injured::core::Feedback;
    ///
    /// let feedback = Feedback::new(1, 2).unwrap();
    /// assert_eq!(feedback.dead(), 1);
    /// assert_eq!(feedback.injured(), 2);
    ///
    /// assert!(Feedback::new(3, 2).is_err());
    /// assert!(Feedback::new(-1, 0).is_err());
    /// ```
    pub fn new(dead: i64, injured: i64) -> Result<Self, FeedbackError> {
        let max = CODE_LENGTH as i64;
        // Bound each count before summing so huge inputs cannot overflow
        let in_range = (0..=max).contains(&dead)
            && (0..=max).contains(&injured)
            && dead + injured <= max;
        if !in_range {
            return Err(FeedbackError::InvalidFeedback { dead, injured });
        }
        Ok(Self {
            dead: dead as u8,
            injured: injured as u8,
        })
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where the digits agree (dead)
    /// 2. Count the remaining guess digits that occur elsewhere in the secret (injured)
    ///
    /// # Examples
    /// ```
    /// use dead_injured::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("1243").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.dead(), 2);
    /// assert_eq!(feedback.injured(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut dead = 0u8;
        let mut injured = 0u8;

        for (&g, &s) in guess.digits().iter().zip(secret.digits()) {
            if g == s {
                dead += 1;
            } else if secret.contains(g) {
                injured += 1;
            }
        }

        Self { dead, injured }
    }

    /// Number of digits in the right position
    #[inline]
    #[must_use]
    pub const fn dead(self) -> u8 {
        self.dead
    }

    /// Number of digits present but misplaced
    #[inline]
    #[must_use]
    pub const fn injured(self) -> u8 {
        self.injured
    }

    /// Check if this feedback means the code was found
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.dead as usize == CODE_LENGTH
    }

    /// Parse feedback from text such as "1 2", "1,2", "1/2" or "12"
    ///
    /// # Errors
    /// Returns `FeedbackError::Malformed` if the text is not two integers and
    /// `FeedbackError::InvalidFeedback` if the counts are impossible.
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let trimmed = text.trim();
        let malformed = || FeedbackError::Malformed(trimmed.to_string());

        let parts: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | ':'))
            .filter(|part| !part.is_empty())
            .collect();

        let (dead, injured) = match parts.as_slice() {
            [dead, injured] => (
                dead.parse::<i64>().map_err(|_| malformed())?,
                injured.parse::<i64>().map_err(|_| malformed())?,
            ),
            [packed] if packed.len() == 2 && packed.bytes().all(|b| b.is_ascii_digit()) => {
                let bytes = packed.as_bytes();
                (i64::from(bytes[0] - b'0'), i64::from(bytes[1] - b'0'))
            }
            _ => return Err(malformed()),
        };

        Self::new(dead, injured)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dead: {} Injured: {}", self.dead, self.injured)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::all_codes;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn feedback_solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.dead(), 4);
        assert_eq!(Feedback::SOLVED.injured(), 0);
    }

    #[test]
    fn two_dead_two_injured() {
        let feedback = Feedback::calculate(&code("1243"), &code("1234"));
        assert_eq!(feedback, Feedback::new(2, 2).unwrap());
    }

    #[test]
    fn nothing_in_common() {
        let feedback = Feedback::calculate(&code("5678"), &code("1234"));
        assert_eq!(feedback, Feedback::new(0, 0).unwrap());
    }

    #[test]
    fn all_injured() {
        let feedback = Feedback::calculate(&code("4321"), &code("1234"));
        assert_eq!(feedback, Feedback::new(0, 4).unwrap());
    }

    #[test]
    fn exact_match_is_solved() {
        for text in ["0123", "9876", "5410"] {
            let c = code(text);
            assert!(Feedback::calculate(&c, &c).is_solved());
        }
    }

    #[test]
    fn mixed_partial_match() {
        // 1 in place, 5 misplaced, 7 and 9 absent
        let feedback = Feedback::calculate(&code("1795"), &code("1523"));
        assert_eq!(feedback.dead(), 1);
        assert_eq!(feedback.injured(), 1);
    }

    #[test]
    fn matches_count_common_digits() {
        let codes = all_codes();
        for g in codes {
            for s in codes {
                let feedback = Feedback::calculate(g, s);
                let common = (g.digit_mask() & s.digit_mask()).count_ones() as u8;
                assert_eq!(feedback.dead() + feedback.injured(), common);
                assert_eq!(feedback.is_solved(), g == s);
            }
        }
    }

    #[test]
    fn score_is_symmetric_for_distinct_digits() {
        let a = code("1739");
        let b = code("3790");
        assert_eq!(Feedback::calculate(&a, &b), Feedback::calculate(&b, &a));
    }

    #[test]
    fn new_rejects_impossible_counts() {
        assert!(Feedback::new(5, 0).is_err());
        assert!(Feedback::new(2, 3).is_err());
        assert!(Feedback::new(0, -1).is_err());
        assert_eq!(
            Feedback::new(-2, 1),
            Err(FeedbackError::InvalidFeedback {
                dead: -2,
                injured: 1
            })
        );
        assert!(Feedback::new(i64::MAX, 1).is_err());
        assert!(Feedback::new(1, i64::MAX).is_err());
        assert!(Feedback::new(i64::MIN, 4).is_err());
        assert!(Feedback::new(0, 4).is_ok());
        assert!(Feedback::new(3, 1).is_ok());
    }

    #[test]
    fn parse_accepts_common_forms() {
        let expected = Feedback::new(1, 2).unwrap();
        for text in ["1 2", "1,2", "1/2", "1:2", " 1 , 2 ", "12"] {
            assert_eq!(Feedback::parse(text).unwrap(), expected, "input {text:?}");
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Feedback::parse("one two"),
            Err(FeedbackError::Malformed(_))
        ));
        assert!(matches!(Feedback::parse(""), Err(FeedbackError::Malformed(_))));
        assert!(matches!(
            Feedback::parse("1 2 3"),
            Err(FeedbackError::Malformed(_))
        ));
        assert!(matches!(
            Feedback::parse("123"),
            Err(FeedbackError::Malformed(_))
        ));
    }

    #[test]
    fn parse_validates_counts() {
        assert!(matches!(
            Feedback::parse("3 3"),
            Err(FeedbackError::InvalidFeedback { .. })
        ));
        assert!(matches!(
            Feedback::parse("-1 2"),
            Err(FeedbackError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn parse_rejects_overflowing_counts() {
        assert_eq!(
            Feedback::parse("9223372036854775807 1"),
            Err(FeedbackError::InvalidFeedback {
                dead: i64::MAX,
                injured: 1
            })
        );
        assert!(matches!(
            Feedback::parse("9223372036854775807 9223372036854775807"),
            Err(FeedbackError::InvalidFeedback { .. })
        ));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            Feedback::new(2, 1).unwrap().to_string(),
            "Dead: 2 Injured: 1"
        );
    }
}
