// ============================================================
// Layer 3 — GameSession
// ============================================================
// All the mutable state of one game, in one struct:
//   - the current question
//   - the answer being built from recognised digits
//   - the score
//
// Grading rules (kept from the original game):
//   - correct   → score + 1
//   - incorrect → score - 1, but never below 0
//   - after grading, the answer resets to "0"
//   - reaching the target score (default 10) wins the game;
//     otherwise the next question becomes current
//
// The next question is handed in by the caller so this type
// stays free of randomness and is trivially testable.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use crate::domain::{
    answer::AccumulatingAnswer,
    prediction::Digit,
    question::Question,
};

/// The result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether the submitted answer matched
    pub correct: bool,

    /// The answer the question expected
    pub expected: u64,

    /// Score after grading
    pub score: u32,

    /// True when the score reached the target — the game is over
    pub won: bool,
}

impl SubmitOutcome {
    /// The message the player sees after submitting
    pub fn message(&self) -> String {
        if self.correct {
            "You got the correct answer!".to_string()
        } else {
            format!("The correct answer was {}", self.expected)
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    question:     Question,
    answer:       AccumulatingAnswer,
    score:        u32,
    target_score: u32,
    won:          bool,
}

impl GameSession {
    pub fn new(first_question: Question, target_score: u32) -> Self {
        Self {
            question:     first_question,
            answer:       AccumulatingAnswer::new(),
            score:        0,
            target_score,
            won:          false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &AccumulatingAnswer {
        &self.answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn push_digit(&mut self, digit: Digit) {
        self.answer.push_digit(digit);
    }

    pub fn clear_answer(&mut self) {
        self.answer.clear();
    }

    /// Grade the current answer, update the score and move on.
    ///
    /// `next_question` becomes current unless this submission wins
    /// the game. An answer too long to parse counts as incorrect.
    pub fn submit(&mut self, next_question: Question) -> SubmitOutcome {
        let expected = self.question.correct_answer();
        let correct  = self.answer.value() == Some(expected);

        if correct {
            self.score += 1;
        } else {
            self.score = self.score.saturating_sub(1);
        }

        self.answer.clear();
        self.won = self.score >= self.target_score;
        if !self.won {
            self.question = next_question;
        }

        SubmitOutcome { correct, expected, score: self.score, won: self.won }
    }
}
