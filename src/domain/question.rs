// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// An arithmetic problem: two operands and an operator.
//
// Generation rules (kept from the original game):
//   - both operands uniformly in 1..=max_operand (default 20)
//   - addition or multiplication with equal probability
//
// The RNG is passed in so tests can use a seeded StdRng and
// get the same questions every run.
//
// Reference: rand crate documentation

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Multiply,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add      => '+',
            Operator::Multiply => '*',
        }
    }

    /// Widened to u64 so no pair of u32 operands can overflow
    pub fn apply(self, lhs: u32, rhs: u32) -> u64 {
        let (lhs, rhs) = (u64::from(lhs), u64::from(rhs));
        match self {
            Operator::Add      => lhs + rhs,
            Operator::Multiply => lhs * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub lhs:      u32,
    pub operator: Operator,
    pub rhs:      u32,
}

impl Question {
    pub fn new(lhs: u32, operator: Operator, rhs: u32) -> Self {
        Self { lhs, operator, rhs }
    }

    /// Draw a random question with operands in 1..=max_operand.
    /// A max_operand of 0 is treated as 1.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, max_operand: u32) -> Self {
        let max = max_operand.max(1);
        let lhs = rng.gen_range(1..=max);
        let rhs = rng.gen_range(1..=max);
        let operator = if rng.gen_bool(0.5) { Operator::Add } else { Operator::Multiply };
        Self::new(lhs, operator, rhs)
    }

    pub fn correct_answer(&self) -> u64 {
        self.operator.apply(self.lhs, self.rhs)
    }
}

/// Shown to the player as "7 * 3 = "
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ", self.lhs, self.operator.symbol(), self.rhs)
    }
}
