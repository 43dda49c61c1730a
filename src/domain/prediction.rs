// ============================================================
// Layer 3 — Scores, Digits and the Decision Rule
// ============================================================
// The classifier produces one score per digit class. The
// decision rule turns those ten scores into a single digit:
//
//   best = 0
//   for i in 1..10:
//       if scores[i] > scores[best]: best = i
//
// The comparison is strict, so ties go to the lowest index
// and a vector of all-equal scores predicts 0. A NaN score
// never compares greater, so it can never displace index 0.
//
// Scores are NOT required to sum to 1 — the model may emit raw
// logits. Arg-max is the same either way.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            Rust Book §13 (Iterators)

use anyhow::{ensure, Result};
use std::fmt;

use crate::domain::NUM_CLASSES;

// ─── Digit ────────────────────────────────────────────────────────────────────
/// A predicted digit, always in 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns None unless value < 10
    #[cfg(test)]
    pub fn new(value: u8) -> Option<Self> {
        (value < 10).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for this digit ('0'..='9')
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── ScoreVector ──────────────────────────────────────────────────────────────
/// Per-class confidence scores; index i is the score for digit i.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreVector([f32; NUM_CLASSES]);

impl ScoreVector {
    pub fn new(scores: [f32; NUM_CLASSES]) -> Self {
        Self(scores)
    }

    /// Build from the model's flat output.
    /// Fails if the output does not have exactly NUM_CLASSES entries.
    pub fn from_slice(scores: &[f32]) -> Result<Self> {
        ensure!(
            scores.len() == NUM_CLASSES,
            "Expected {} class scores, model produced {}",
            NUM_CLASSES, scores.len()
        );
        let mut out = [0.0f32; NUM_CLASSES];
        out.copy_from_slice(scores);
        Ok(Self::new(out))
    }

    pub fn scores(&self) -> &[f32; NUM_CLASSES] {
        &self.0
    }

    /// Score for a single digit class
    pub fn score(&self, digit: Digit) -> f32 {
        self.0[digit.value() as usize]
    }

    /// The decision rule: first (lowest-index) maximum wins.
    pub fn predicted_digit(&self) -> Digit {
        let mut best = 0usize;
        for (i, &score) in self.0.iter().enumerate().skip(1) {
            if score > self.0[best] {
                best = i;
            }
        }
        // best < NUM_CLASSES == 10
        Digit(best as u8)
    }
}

/// The outcome of running the pipeline once: the digit and the
/// scores it was chosen from (kept for display and debugging).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub digit:  Digit,
    pub scores: ScoreVector,
}

impl From<ScoreVector> for Classification {
    fn from(scores: ScoreVector) -> Self {
        Self { digit: scores.predicted_digit(), scores }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f32; 10]) -> ScoreVector {
        ScoreVector::new(values)
    }

    #[test]
    fn test_picks_highest_score() {
        let s = scores([0.1, 0.9, 0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(s.predicted_digit().value(), 1);
    }

    #[test]
    fn test_tie_goes_to_first_maximum() {
        let s = scores([0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(s.predicted_digit().value(), 0);
    }

    #[test]
    fn test_later_tie_keeps_earlier_index() {
        let s = scores([0.0, 0.0, 0.0, 0.7, 0.0, 0.0, 0.0, 0.7, 0.0, 0.0]);
        assert_eq!(s.predicted_digit().value(), 3);
    }

    #[test]
    fn test_all_equal_predicts_zero() {
        assert_eq!(scores([0.0; 10]).predicted_digit().value(), 0);
        assert_eq!(scores([0.3; 10]).predicted_digit().value(), 0);
    }

    #[test]
    fn test_all_negative_logits() {
        // Raw logits can be negative — arg-max still applies
        let s = scores([-3.0, -2.5, -9.0, -1.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0]);
        assert_eq!(s.predicted_digit().value(), 3);
    }

    #[test]
    fn test_all_non_positive_with_zero_first() {
        let s = scores([0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0, -9.0]);
        assert_eq!(s.predicted_digit().value(), 0);
    }

    #[test]
    fn test_nan_never_wins() {
        let mut values = [0.0f32; 10];
        values[4] = f32::NAN;
        assert_eq!(scores(values).predicted_digit().value(), 0);
    }

    #[test]
    fn test_last_class_can_win() {
        let mut values = [0.0f32; 10];
        values[9] = 1.0;
        assert_eq!(scores(values).predicted_digit().value(), 9);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(ScoreVector::from_slice(&[0.1; 9]).is_err());
        assert!(ScoreVector::from_slice(&[0.1; 11]).is_err());
        assert!(ScoreVector::from_slice(&[0.1; 10]).is_ok());
    }

    #[test]
    fn test_digit_bounds_and_char() {
        assert!(Digit::new(10).is_none());
        let seven = Digit::new(7).unwrap();
        assert_eq!(seven.to_char(), '7');
        assert_eq!(seven.to_string(), "7");
    }

    #[test]
    fn test_classification_from_scores() {
        let s = scores([0.0, 0.0, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8, 0.0]);
        let c = Classification::from(s);
        assert_eq!(c.digit.value(), 8);
        assert_eq!(c.scores.score(c.digit), 0.8);
    }
}
