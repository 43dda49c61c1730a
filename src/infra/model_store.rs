// ============================================================
// Layer 6 — Model Store
// ============================================================
// Opens the pre-trained digit model the app ships with.
//
// Layout of a model directory:
//   assets/digit_model/
//     model_config.json   ← architecture (DigitModelConfig)
//     model.mpk           ← weights, written by CompactRecorder
//
// The config is read first so the exact architecture can be
// rebuilt; the weights are then loaded into it. Burn's record
// loading is type-checked, so weights that don't fit the
// architecture fail here rather than at inference time.
//
// The model is an opaque, read-only asset: this app never
// trains it. Any failure to open it is fatal for startup.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{ensure, Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use std::{fs, path::PathBuf};

use crate::domain::NUM_CLASSES;
use crate::ml::model::{DigitModel, DigitModelConfig};

const CONFIG_FILE: &str = "model_config.json";
/// Recorder appends its own extension
const WEIGHTS_FILE: &str = "model";

/// Locates and loads the model artifact in one directory.
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read model_config.json and check it describes a digit classifier.
    pub fn load_config(&self) -> Result<DigitModelConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!("Cannot read model config from '{}'", path.display())
            })?;

        let cfg: DigitModelConfig = serde_json::from_str(&json)
            .with_context(|| format!("Malformed model config '{}'", path.display()))?;

        ensure!(
            cfg.num_classes == NUM_CLASSES,
            "Model in '{}' has {} output classes, expected {}",
            self.dir.display(), cfg.num_classes, NUM_CLASSES
        );
        Ok(cfg)
    }

    /// Rebuild the architecture from the config and load the weights into it.
    pub fn load_model<B: Backend>(&self, device: &B::Device) -> Result<DigitModel<B>> {
        let cfg   = self.load_config()?;
        let model = cfg.init::<B>(device);
        let path  = self.dir.join(WEIGHTS_FILE);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load model weights '{}'", path.display())
            })?;

        tracing::info!(
            "Loaded digit model from '{}' (hidden_size={})",
            self.dir.display(), cfg.hidden_size
        );
        Ok(model.load_record(record))
    }

    /// Write a model and its config — used to build test artifacts.
    #[cfg(test)]
    pub fn save_model<B: Backend>(&self, model: &DigitModel<B>, cfg: &DigitModelConfig) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(CONFIG_FILE), serde_json::to_string_pretty(cfg)?)?;

        let path = self.dir.join(WEIGHTS_FILE);
        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;
        Ok(())
    }
}
