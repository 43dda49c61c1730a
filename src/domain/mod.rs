// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits describing the game and the
// digit-recognition pipeline.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - NO image crate types — rasters are plain pixel grids
//   - Only plain Rust structs, enums, and traits
//
// The pipeline vocabulary lives here:
//
//   Drawing ──capture──▶ RasterImage ──preprocess──▶ InputTensor
//                                                        │
//                                                     classify
//                                                        ▼
//   AccumulatingAnswer ◀──append── Digit ◀──decide── ScoreVector
//
// and so does the game vocabulary (Question, GameSession).
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Fixed-size RGBA pixel grid produced by capture
pub mod raster;

/// Normalised float encoding of a raster
pub mod tensor;

/// Score vector, predicted digit and the arg-max decision rule
pub mod prediction;

/// Freehand strokes and the pen they are drawn with
pub mod stroke;

/// The digit string the user is building up
pub mod answer;

/// Arithmetic questions
pub mod question;

/// Score bookkeeping for one game
pub mod session;

/// Core abstractions (traits) that other layers implement
pub mod traits;

/// Width of the raster the classifier was trained on
pub const IMAGE_WIDTH: u32 = 28;

/// Height of the raster the classifier was trained on
pub const IMAGE_HEIGHT: u32 = 28;

/// Digits 0-9
pub const NUM_CLASSES: usize = 10;
