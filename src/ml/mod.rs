// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn tensor and module code.
// Only infra/model_store.rs also touches burn, to read the
// weight records from disk.
//
// What's in this layer:
//
//   model.rs      — The digit classifier architecture
//                   Two 3x3 convolutions, adaptive pooling,
//                   and two linear layers producing 10 logits.
//                   Trained elsewhere; this crate only loads it.
//
//   inferencer.rs — The classifier invoker
//                   Holds the loaded model, turns an
//                   InputTensor into a [1, 1, 28, 28] tensor,
//                   runs the forward pass, returns 10 scores.
//
// Inference runs on the CPU NdArray backend: one 28x28 image
// per call does not justify a GPU device.
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §6 (Inference)

/// Convolutional digit classifier architecture
pub mod model;

/// Inference engine — loads the model and scores drawings
pub mod inferencer;
