//! Candidate space over all valid codes
//!
//! The full space is every arrangement of four distinct digits, 10·9·8·7 =
//! 5,040 codes, kept in ascending order of their text form.

use crate::core::{Code, Feedback};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Size of the full candidate space
pub const TOTAL_CODES: usize = 5040;

static ALL_CODES: LazyLock<Vec<Code>> = LazyLock::new(generate_all_codes);

/// Enumerate 0000..=9999 and keep the numbers whose digits are distinct
fn generate_all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(TOTAL_CODES);
    for n in 0..10_000u16 {
        let digits = [
            (n / 1000) as u8,
            (n / 100 % 10) as u8,
            (n / 10 % 10) as u8,
            (n % 10) as u8,
        ];
        let mask = digits.iter().fold(0u16, |mask, &d| mask | (1 << d));
        if mask.count_ones() == 4 {
            codes.push(Code::from_digits_unchecked(digits));
        }
    }
    codes
}

/// Every valid code, in enumeration order
#[must_use]
pub fn all_codes() -> &'static [Code] {
    &ALL_CODES
}

/// Codes still consistent with the feedback seen so far
///
/// Starts as the full space and only ever shrinks. Order is preserved by
/// every operation, so "the first candidate" is well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// The full space of 5,040 codes
    #[must_use]
    pub fn all() -> Self {
        Self {
            codes: all_codes().to_vec(),
        }
    }

    /// Build a set from explicit codes, keeping their order
    #[must_use]
    pub fn from_codes(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    /// Candidates that would have produced `feedback` for `guess`
    ///
    /// # Examples
    /// ```
    /// use dead_injured::core::{Code, Feedback};
    /// use dead_injured::solver::CandidateSet;
    ///
    /// let secret = Code::parse("1234").unwrap();
    /// let guess = Code::parse("5678").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// let narrowed = CandidateSet::all().filter(&guess, feedback);
    /// assert!(narrowed.contains(&secret));
    /// assert_eq!(narrowed.len(), 360); // 6·5·4·3 codes avoid 5, 6, 7 and 8
    /// ```
    #[must_use]
    pub fn filter(&self, guess: &Code, feedback: Feedback) -> Self {
        Self {
            codes: self
                .codes
                .iter()
                .filter(|candidate| Feedback::calculate(guess, candidate) == feedback)
                .copied()
                .collect(),
        }
    }

    /// In-place version of [`CandidateSet::filter`]
    pub fn narrow(&mut self, guess: &Code, feedback: Feedback) {
        self.codes
            .retain(|candidate| Feedback::calculate(guess, candidate) == feedback);
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True once contradictory feedback has eliminated everything
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First candidate in enumeration order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Code> {
        self.codes.first().copied()
    }

    /// Uniformly random candidate
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Code> {
        self.codes.choose(rng).copied()
    }

    /// Check whether a code is still a candidate
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// Iterate remaining candidates in order
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    /// Remaining candidates as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    /// Group candidates by the feedback `guess` would receive from each
    #[must_use]
    pub fn partition(&self, guess: &Code) -> FxHashMap<Feedback, usize> {
        let mut buckets = FxHashMap::default();
        for candidate in &self.codes {
            *buckets
                .entry(Feedback::calculate(guess, candidate))
                .or_insert(0) += 1;
        }
        buckets
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::all()
    }
}
