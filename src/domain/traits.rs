// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the recognition pipeline:
//
//   RasterProducer  — anything that can hand over a raster of
//                     the requested size (stroke rasteriser,
//                     image file, an already-captured raster)
//
//   DigitClassifier — anything that turns an InputTensor into
//                     ten class scores (the Burn inferencer,
//                     or a stub in tests)
//
// The application layer only sees these traits, so the whole
// pipeline can be exercised without a trained model on disk.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::{ensure, Result};

use crate::domain::{
    prediction::ScoreVector,
    raster::RasterImage,
    tensor::InputTensor,
};

// ─── RasterProducer ───────────────────────────────────────────────────────────
/// Any component that can capture the current drawing as a raster.
///
/// Implementations:
///   - Drawing        → rasterised stroke by stroke
///   - ImageFile      → decoded and scaled from disk
///   - RasterImage    → already captured, size must match
pub trait RasterProducer {
    /// Produce a raster of exactly `width` × `height` pixels.
    fn produce(&self, width: u32, height: u32) -> Result<RasterImage>;
}

impl RasterProducer for RasterImage {
    fn produce(&self, width: u32, height: u32) -> Result<RasterImage> {
        ensure!(
            self.dimensions() == (width, height),
            "Captured raster is {}x{}, expected {}x{}",
            self.width(), self.height(), width, height
        );
        Ok(self.clone())
    }
}

// ─── DigitClassifier ──────────────────────────────────────────────────────────
/// Any component that can score an input tensor against the ten digits.
///
/// Implementations must be stateless from the caller's view:
/// the same tensor always yields the same scores.
pub trait DigitClassifier {
    fn scores(&self, input: &InputTensor) -> Result<ScoreVector>;
}
