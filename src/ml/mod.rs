// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the infra layer that deserialises weights into it.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without a GPU
//   - The session and its contract never see a tensor
//
// What's in this layer:
//
//   model.rs     — The transformer encoder architecture with
//                  the span-prediction head:
//                  • Token embeddings
//                  • Positional embeddings
//                  • Multi-head self-attention
//                  • Feed-forward networks (GELU activation)
//                  • Layer normalisation
//                  • Residual connections
//                  • Start/end span logits per token
//
//   provider.rs  — The concrete AnswerProvider
//                  Binds a named model directory, tokenises
//                  [CLS] question [SEP] context [SEP], runs the
//                  model, and decodes the best answer span with
//                  its softmax confidence
//
// Reference: Vaswani et al. (2017) Attention Is All You Need
//            Devlin et al. (2019) BERT

/// Transformer encoder span-prediction architecture
pub mod model;

/// The checkpoint-backed AnswerProvider implementation
pub mod provider;
