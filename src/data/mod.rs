// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the user's finger and the model input:
//
//   stroke file / image file
//       │
//       ▼
//   loader            → Drawing or ImageFile (RasterProducers)
//       │
//       ▼
//   rasterizer        → 28x28 RasterImage
//       │
//       ▼
//   preprocessor      → InputTensor (inverted, scaled to [0, 1])
//       │
//       ▼
//   (Layer 5 — inferencer)
//
// Each module is responsible for exactly one step.
//
// Reference: image / imageproc crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Loads drawings and images from disk
pub mod loader;

/// Paints strokes and scales them to the raster size
pub mod rasterizer;

/// Converts a raster into the classifier's input tensor
pub mod preprocessor;
