// ============================================================
// Layer 3 — AccumulatingAnswer
// ============================================================
// The number the user is building, one recognised digit at a
// time. It starts (and resets) to the sentinel "0":
//
//   "0"  + 4 → "4"     (sentinel replaced, no leading zero)
//   "4"  + 2 → "42"    (appended on the right)
//   clear    → "0"
//
// Reference: Rust Book §8 (Strings in Rust)

use std::fmt;

use crate::domain::prediction::Digit;

const SENTINEL: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulatingAnswer {
    digits: String,
}

impl AccumulatingAnswer {
    pub fn new() -> Self {
        Self { digits: SENTINEL.to_string() }
    }

    /// Append a recognised digit, replacing the "0" sentinel
    pub fn push_digit(&mut self, digit: Digit) {
        if self.digits == SENTINEL {
            self.digits.clear();
        }
        self.digits.push(digit.to_char());
    }

    /// Back to "0"
    pub fn clear(&mut self) {
        self.digits.clear();
        self.digits.push_str(SENTINEL);
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The answer as a number, or None if it no longer fits in a u64
    pub fn value(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl Default for AccumulatingAnswer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccumulatingAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
