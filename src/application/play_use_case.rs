// ============================================================
// Layer 2 — PlayUseCase
// ============================================================
// Drives one game: asks questions, turns drawings into answer
// digits through the ClassifyUseCase, and grades submissions.
//
//   draw   → classify → append digit to the answer
//   clear  → answer back to "0"
//   submit → grade, update score, next question (or win)
//
// All mutable state lives in the GameSession; this struct adds
// the classifier and the random source for new questions.
//
// Reference: Rust Book §10 (Generic Types and Traits)
//            rand crate documentation

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::application::classify_use_case::ClassifyUseCase;
use crate::domain::{
    answer::AccumulatingAnswer,
    prediction::Digit,
    question::Question,
    session::{GameSession, SubmitOutcome},
    traits::{DigitClassifier, RasterProducer},
};

// ─── Game Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding model_config.json and the weights
    pub model_dir:    String,
    /// Points needed to win
    pub target_score: u32,
    /// Largest operand a question may use
    pub max_operand:  u32,
    /// Fixed seed for reproducible question sequences
    pub seed:         Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            model_dir:    "assets/digit_model".to_string(),
            target_score: 10,
            max_operand:  20,
            seed:         None,
        }
    }
}

// ─── PlayUseCase ──────────────────────────────────────────────────────────────
pub struct PlayUseCase<C: DigitClassifier> {
    classify:    ClassifyUseCase<C>,
    session:     GameSession,
    rng:         StdRng,
    max_operand: u32,
}

impl<C: DigitClassifier> PlayUseCase<C> {
    pub fn new(classify: ClassifyUseCase<C>, config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let first   = Question::generate(&mut rng, config.max_operand);
        let session = GameSession::new(first, config.target_score);
        tracing::info!(
            "New game: first to {} points, operands up to {}",
            config.target_score, config.max_operand
        );
        Self { classify, session, rng, max_operand: config.max_operand }
    }

    /// Recognise one drawn digit and append it to the answer.
    pub fn input_drawing(&mut self, producer: &dyn RasterProducer) -> Result<Digit> {
        let digit = self.classify.classify_drawing(producer)?;
        self.session.push_digit(digit);
        Ok(digit)
    }

    pub fn clear(&mut self) {
        self.session.clear_answer();
    }

    /// Grade the current answer and move to the next question.
    pub fn submit(&mut self) -> SubmitOutcome {
        let next    = Question::generate(&mut self.rng, self.max_operand);
        let outcome = self.session.submit(next);
        tracing::info!(
            "Answer {} — score {}",
            if outcome.correct { "correct" } else { "incorrect" },
            outcome.score
        );
        outcome
    }

    pub fn question(&self) -> &Question {
        self.session.question()
    }

    pub fn answer(&self) -> &AccumulatingAnswer {
        self.session.answer()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }
}
