// ============================================================
// Layer 5 — Inferencer
// ============================================================
// The classifier invoker: holds the loaded model for the life
// of the process and runs one forward pass per drawing.
//
//   InputTensor (784 floats)
//       │ reshape
//       ▼
//   Tensor [1, 1, 28, 28]
//       │ model.forward
//       ▼
//   Tensor [1, 10] → ScoreVector
//
// The raw logits are returned; the decision rule only needs
// their order, so no softmax is applied.
use anyhow::{anyhow, ensure, Result};
use burn::{prelude::*, tensor::TensorData};

use crate::domain::{
    prediction::ScoreVector,
    tensor::InputTensor,
    traits::DigitClassifier,
    IMAGE_HEIGHT, IMAGE_WIDTH,
};
use crate::infra::model_store::ModelStore;
use crate::ml::model::DigitModel;

type InferBackend = burn::backend::NdArray;

pub struct Inferencer {
    model:  DigitModel<InferBackend>,
    device: burn::backend::ndarray::NdArrayDevice,
}

impl Inferencer {
    /// Load the model once; any error here is a startup failure.
    pub fn from_store(store: &ModelStore) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let model  = store.load_model::<InferBackend>(&device)?;
        Ok(Self::from_model(model, device))
    }

    /// Wrap an already-built model
    pub fn from_model(
        model:  DigitModel<InferBackend>,
        device: burn::backend::ndarray::NdArrayDevice,
    ) -> Self {
        Self { model, device }
    }
}

impl DigitClassifier for Inferencer {
    fn scores(&self, input: &InputTensor) -> Result<ScoreVector> {
        ensure!(
            (input.width(), input.height()) == (IMAGE_WIDTH, IMAGE_HEIGHT),
            "Model expects a {}x{} input, got {}x{}",
            IMAGE_WIDTH, IMAGE_HEIGHT, input.width(), input.height()
        );

        let shape  = [1, 1, input.height() as usize, input.width() as usize];
        let tensor = Tensor::<InferBackend, 4>::from_data(
            TensorData::new(input.values().to_vec(), shape),
            &self.device,
        );

        let output = self.model.forward(tensor);
        let values = output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read model output: {e:?}"))?;

        let scores = ScoreVector::from_slice(&values)?;
        tracing::debug!("Scores: {:?}", scores.scores());
        Ok(scores)
    }
}
