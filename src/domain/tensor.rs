// ============================================================
// Layer 3 — InputTensor Domain Type
// ============================================================
// The classifier's input: one float per raster pixel,
// row-major, each value in [0.0, 1.0].
//
// Kept as a plain Vec<f32> here — the ml layer turns it into
// a Burn tensor of shape [1, 1, height, width].

use anyhow::{ensure, Result};

/// Normalised pixel intensities for exactly one raster.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    width:  u32,
    height: u32,
    values: Vec<f32>,
}

impl InputTensor {
    /// Wrap row-major values. Fails unless values.len() == width * height.
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        ensure!(
            values.len() == width as usize * height as usize,
            "Tensor of {}x{} needs {} values, got {}",
            width, height, width as usize * height as usize, values.len()
        );
        Ok(Self { width, height, values })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
