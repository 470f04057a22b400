//! Dead/Injured code representation
//!
//! A Code is four pairwise-distinct decimal digits. It is used both as a
//! secret and as a guess; the role is decided by the caller.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Four distinct digits (0-9)
///
/// Only constructible through validating constructors, so every value
/// upholds the distinctness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    WrongLength(usize),
    NonDigit(char),
    DuplicateDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Please enter exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Please enter digits only (0-9), found '{ch}'"),
            Self::DuplicateDigit(digit) => {
                write!(f, "All digits must be unique, {digit} appears more than once")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from its text form
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The text is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - Any digit repeats
    ///
    /// # Examples
    /// ```
    /// use dead_injured::core::Code;
    ///
    /// let code = Code::parse("0137").unwrap();
    /// assert_eq!(code.digits(), &[0, 1, 3, 7]);
    ///
    /// assert!(Code::parse("123").is_err());
    /// assert!(Code::parse("12a4").is_err());
    /// assert!(Code::parse("1123").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::WrongLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            *slot = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))? as u8;
        }

        Self::from_digits(digits)
    }

    /// Build a code from raw digits
    ///
    /// # Errors
    /// Returns `CodeError::NonDigit` for a value above 9 and
    /// `CodeError::DuplicateDigit` if a value repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut seen = [false; 10];
        for &digit in &digits {
            if digit > 9 {
                return Err(CodeError::NonDigit(char::from(b'0'.saturating_add(digit))));
            }
            if seen[usize::from(digit)] {
                return Err(CodeError::DuplicateDigit(digit));
            }
            seen[usize::from(digit)] = true;
        }
        Ok(Self(digits))
    }

    /// Draw a uniformly random code
    ///
    /// Shuffles the ten digits and keeps the first four, so each of the
    /// 5,040 codes is equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);
        Self([pool[0], pool[1], pool[2], pool[3]])
    }

    /// Construct without validation; callers guarantee distinct digits
    pub(crate) const fn from_digits_unchecked(digits: [u8; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Get the digits in position order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a digit at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Bitmask of the digits present (bit d set for digit d)
    #[inline]
    #[must_use]
    pub fn digit_mask(&self) -> u16 {
        self.0.iter().fold(0u16, |mask, &d| mask | (1 << d))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
