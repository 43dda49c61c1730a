// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Disk access that doesn't belong to any business layer:
//
//   model_store.rs — Opening the bundled model artifact.
//                    Reads model_config.json to rebuild the
//                    architecture, then loads the weights
//                    with Burn's CompactRecorder.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Records)

/// Model artifact loading
pub mod model_store;
