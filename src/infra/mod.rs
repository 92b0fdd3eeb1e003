// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the on-disk side of provider binding. A provider
// name is a registry key: it resolves to one directory under
// the models root, and that directory holds everything needed
// to rebuild the model for inference:
//
//   models/<provider-name>/
//     model.json       ← architecture manifest (JSON)
//     model.mpk.gz     ← pre-trained weights (Burn CompactRecorder)
//     tokenizer.json   ← HuggingFace-format tokenizer
//
//   model_store.rs     — Resolves the name, loads the manifest
//                        and deserialises the weights into a
//                        freshly built model.
//
//   tokenizer_store.rs — Loads the tokenizer that must match the
//                        vocabulary the weights were trained with.
//
// Why save the manifest separately?
//   Weights alone don't say what shape of model they belong to.
//   The manifest records the exact architecture (d_model,
//   num_layers, ...) so the model can be rebuilt before the
//   weights are loaded into it. Loading is type-safe: it fails
//   if the architecture doesn't match.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Provider-name resolution, manifest and weight loading
pub mod model_store;

/// Tokenizer loading per model directory
pub mod tokenizer_store;
