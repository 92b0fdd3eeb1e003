// ============================================================
// Layer 3 — Answer Report
// ============================================================
// The structured outcome of one answer_question call. The
// session never throws at its callers — every precondition
// failure, provider error and threshold decision becomes one
// of these variants, and Display renders the user-facing
// answer line the driver prints after "A: ".
//
// The taxonomy:
//   Answered          — score cleared the threshold
//   Rejected          — provider answered but the score was
//                       below threshold; a designed outcome,
//                       not a failure. The candidate text is
//                       discarded, never surfaced.
//   ModelUnavailable  — session is degraded (provider absent)
//   NoContextSet      — no set_context call has happened yet
//   InferenceFailure  — the provider call itself errored
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

/// Outcome of answering one question against the current context.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerReport {
    /// The extracted answer cleared the confidence threshold.
    Answered {
        /// The answer span extracted from the context
        answer: String,
        /// Provider confidence in [0, 1]
        confidence: f32,
    },

    /// The provider's best candidate fell below the threshold.
    /// Treated as "no answer found in the context" — the candidate
    /// text is intentionally not carried here.
    Rejected {
        /// The sub-threshold confidence, kept for logging
        confidence: f32,
    },

    /// The session was constructed without a working provider.
    ModelUnavailable,

    /// answer_question was called before any set_context.
    NoContextSet,

    /// The provider call itself failed.
    InferenceFailure {
        /// Human-readable failure description
        reason: String,
    },
}

impl AnswerReport {
    /// True only for the Answered variant.
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerReport::Answered { .. })
    }

    /// Render a [0, 1] score as a percentage with two decimals,
    /// e.g. 0.8532 → "85.32%".
    pub fn percent(score: f32) -> String {
        format!("{:.2}%", score * 100.0)
    }
}

impl fmt::Display for AnswerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerReport::Answered { answer, confidence } => {
                write!(f, "{} (Confidence: {})", answer, Self::percent(*confidence))
            }
            AnswerReport::Rejected { .. } => {
                write!(
                    f,
                    "I cannot find a relevant answer in the provided context (Low confidence)."
                )
            }
            AnswerReport::ModelUnavailable => {
                write!(f, "Error: Model not initialized.")
            }
            AnswerReport::NoContextSet => {
                write!(f, "Error: No context has been set.")
            }
            AnswerReport::InferenceFailure { reason } => {
                write!(f, "Error: Inference failed: {}", reason)
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rendering() {
        assert_eq!(AnswerReport::percent(0.8532), "85.32%");
        assert_eq!(AnswerReport::percent(0.95), "95.00%");
        assert_eq!(AnswerReport::percent(1.0), "100.00%");
    }

    #[test]
    fn test_answered_display_includes_confidence() {
        let r = AnswerReport::Answered {
            answer:     "December 2021".to_string(),
            confidence: 0.8532,
        };
        assert_eq!(r.to_string(), "December 2021 (Confidence: 85.32%)");
    }

    #[test]
    fn test_rejected_display_never_leaks_a_candidate() {
        // The rejection line is fixed text — there is no answer field
        // on the variant at all, so a low-confidence guess can never
        // reach the user through Display.
        let r = AnswerReport::Rejected { confidence: 0.12 };
        assert_eq!(
            r.to_string(),
            "I cannot find a relevant answer in the provided context (Low confidence)."
        );
    }

    #[test]
    fn test_error_variants_render_as_errors() {
        assert_eq!(
            AnswerReport::ModelUnavailable.to_string(),
            "Error: Model not initialized."
        );
        assert_eq!(
            AnswerReport::NoContextSet.to_string(),
            "Error: No context has been set."
        );
        let r = AnswerReport::InferenceFailure { reason: "tokenise: bad input".into() };
        assert!(r.to_string().starts_with("Error: Inference failed:"));
    }

    #[test]
    fn test_is_answered() {
        let yes = AnswerReport::Answered { answer: "x".into(), confidence: 0.9 };
        assert!(yes.is_answered());
        assert!(!AnswerReport::Rejected { confidence: 0.5 }.is_answered());
        assert!(!AnswerReport::NoContextSet.is_answered());
    }
}
