// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// The recognition pipeline, start to finish:
//
//   Step 1: Capture a 28x28 raster       (RasterProducer)
//   Step 2: Encode it as an InputTensor  (Layer 4 - data)
//   Step 3: Score it with the model      (DigitClassifier)
//   Step 4: Pick the arg-max digit       (Layer 3 - domain)
//
// Runs synchronously and completes fully or returns an error;
// nothing is cached between calls.
//
// Generic over the classifier so the pipeline can be tested
// with a stub instead of a trained model.
//
// Reference: Rust Book §10 (Generic Types and Traits)

use anyhow::{Context, Result};

use crate::data::preprocessor::Preprocessor;
use crate::domain::{
    prediction::{Classification, Digit},
    traits::{DigitClassifier, RasterProducer},
    IMAGE_HEIGHT, IMAGE_WIDTH,
};
use crate::infra::model_store::ModelStore;
use crate::ml::inferencer::Inferencer;

pub struct ClassifyUseCase<C: DigitClassifier> {
    classifier:   C,
    preprocessor: Preprocessor,
}

impl ClassifyUseCase<Inferencer> {
    /// Open the model in `model_dir`. Fails if the artifact can't be loaded.
    pub fn from_model_dir(model_dir: &str) -> Result<Self> {
        let store      = ModelStore::new(model_dir);
        let inferencer = Inferencer::from_store(&store)
            .with_context(|| format!("Cannot start without the digit model in '{model_dir}'"))?;
        Ok(Self::new(inferencer))
    }
}

impl<C: DigitClassifier> ClassifyUseCase<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier, preprocessor: Preprocessor::new() }
    }

    /// Capture → preprocess → infer → decide, keeping the scores.
    pub fn classify(&self, producer: &dyn RasterProducer) -> Result<Classification> {
        let raster = producer
            .produce(IMAGE_WIDTH, IMAGE_HEIGHT)
            .context("Capture failed")?;
        let input  = self.preprocessor.encode(&raster)?;
        let scores = self.classifier.scores(&input)?;

        let result = Classification::from(scores);
        tracing::debug!(
            "Predicted {} (score {:.4})",
            result.digit, result.scores.score(result.digit)
        );
        Ok(result)
    }

    /// The caller-facing entry point: just the digit.
    pub fn classify_drawing(&self, producer: &dyn RasterProducer) -> Result<Digit> {
        Ok(self.classify(producer)?.digit)
    }
}
