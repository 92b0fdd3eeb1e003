// ============================================================
// Layer 3 — Context Document Domain Type
// ============================================================
// Represents the background text a session answers questions
// against, together with where it came from. A plain data
// struct with no behaviour.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A context document loaded from disk (or scripted, in the demo).
/// By the time a ContextDocument exists, the text has already been
/// extracted from whatever file format it lived in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextDocument {
    /// The filename or label — kept for traceability so log lines
    /// can say which document a context came from
    pub source: String,

    /// The full extracted text, before cleaning
    pub text: String,
}

impl ContextDocument {
    /// Create a new ContextDocument. Uses impl Into<String> so
    /// callers can pass &str or String — idiomatic Rust for
    /// flexible string arguments.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
