// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - TransformerQaProvider implements AnswerProvider
//   - A future RemoteQaProvider could also implement it
//   - The session only sees AnswerProvider and works with
//     both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::document::ContextDocument;
use crate::domain::extraction::Extraction;

// ─── AnswerProvider ───────────────────────────────────────────────────────────
/// Any component that can extract an answer span for a question
/// from a context passage. This is the sole external boundary of
/// the system: everything behind it (model, tokenizer, device) is
/// opaque to the session.
///
/// Implementations:
///   - TransformerQaProvider → local Burn transformer checkpoint
///   - (future) RemoteQaProvider → hosted inference endpoint
///   - scripted stubs in the session tests
pub trait AnswerProvider {
    /// Extract the best answer span for `question` from `context`.
    /// Returns the span text and a confidence score in [0, 1].
    /// A failure here is a per-call inference error, never fatal
    /// to the session that owns the provider.
    fn infer(&self, question: &str, context: &str) -> Result<Extraction>;

    /// The registry name this provider was bound under.
    fn name(&self) -> &str;
}

// ─── ContextSource ────────────────────────────────────────────────────────────
/// Any component that can produce a context document.
///
/// Implementations:
///   - DocumentLoader → reads a .docx or plain-text file
///   - (future) UrlSource → fetches a page and strips markup
pub trait ContextSource {
    /// Load the context document from this source.
    fn load(&self) -> Result<ContextDocument>;
}
