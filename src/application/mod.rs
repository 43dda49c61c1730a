// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (recognising a digit, or playing a game).
//
// Rules for this layer:
//   - No tensor or model code here
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The capture → preprocess → infer → decide pipeline
pub mod classify_use_case;

// The question / answer / score loop
pub mod play_use_case;
