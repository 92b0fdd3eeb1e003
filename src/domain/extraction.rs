// ============================================================
// Layer 3 — Extraction Domain Type
// ============================================================
// The transient result of one provider inference call:
// the extracted answer span and how certain the model is
// about it. Produced fresh per question, consumed by the
// session's threshold policy, never persisted.
//
// The score is NOT a calibrated probability — it is only
// meaningful relative to the session's threshold.

/// An extracted answer span with its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The answer text extracted from the context
    pub text: String,

    /// Extraction confidence in [0, 1]
    pub score: f32,
}

impl Extraction {
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self { text: text.into(), score }
    }
}
