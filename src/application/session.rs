// ============================================================
// Layer 2 — QA Session
// ============================================================
// The one component in the system with state and logic of its
// own. A session owns:
//
//   current_context  — the text questions are answered against.
//                      Starts empty; set_context replaces it
//                      wholesale (no append, no merge).
//   score_threshold  — fixed at construction. Extractions at or
//                      above it are surfaced; everything below
//                      is reported as "no answer found".
//   provider         — the bound AnswerProvider, or None.
//
// A session is in exactly one of two states for its whole
// lifetime, decided at construction and never transitioned:
//
//   Ready    — provider bound; questions reach the model
//   Degraded — binding failed; the failure was logged once and
//              every answer_question call short-circuits to
//              ModelUnavailable. There is no reconnect.
//
// answer_question never panics and never returns an error to
// the caller: every outcome, including provider failure, is one
// of the AnswerReport variants.

use std::path::Path;

use crate::domain::report::AnswerReport;
use crate::domain::traits::AnswerProvider;
use crate::ml::provider::TransformerQaProvider;

pub struct QaSession {
    provider:        Option<Box<dyn AnswerProvider>>,
    current_context: String,
    score_threshold: f32,
}

impl QaSession {
    /// Construct a session, attempting to bind the provider named
    /// `provider_name` under `models_root`. Binding failure is NOT
    /// fatal: it is logged here, once, and the session comes back
    /// degraded. Callers that need to know must ask is_ready().
    ///
    /// The threshold is taken as given — the contract fixes it at
    /// construction and performs no range validation.
    pub fn create(models_root: &Path, provider_name: &str, score_threshold: f32) -> Self {
        let provider = match TransformerQaProvider::bind(models_root, provider_name) {
            Ok(p) => {
                tracing::info!("Answer provider '{}' is ready", provider_name);
                Some(Box::new(p) as Box<dyn AnswerProvider>)
            }
            Err(e) => {
                tracing::error!("Error loading model '{}': {:#}", provider_name, e);
                None
            }
        };
        Self::assemble(provider, score_threshold)
    }

    /// Construct a session around an already-bound provider.
    /// Used by callers (and tests) that manage binding themselves.
    pub fn with_provider(provider: Box<dyn AnswerProvider>, score_threshold: f32) -> Self {
        Self::assemble(Some(provider), score_threshold)
    }

    pub(crate) fn assemble(provider: Option<Box<dyn AnswerProvider>>, score_threshold: f32) -> Self {
        Self {
            provider,
            current_context: String::new(),
            score_threshold,
        }
    }

    /// False when the session is degraded (provider failed to bind).
    pub fn is_ready(&self) -> bool {
        self.provider.is_some()
    }

    /// Replace the current context unconditionally. No validation,
    /// no length limit at this layer — any limits are the
    /// provider's concern. Idempotent.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.current_context = context.into();
    }

    /// Answer one question against the current context.
    ///
    /// Preconditions are checked in order, each with its own
    /// terminal report: no provider → ModelUnavailable, empty
    /// context → NoContextSet. Then the provider runs once (no
    /// retry) and the threshold policy decides between Answered
    /// and Rejected. Mutates nothing.
    pub fn answer_question(&self, question: &str) -> AnswerReport {
        let provider = match self.provider.as_deref() {
            Some(p) => p,
            None    => return AnswerReport::ModelUnavailable,
        };

        if self.current_context.is_empty() {
            return AnswerReport::NoContextSet;
        }

        match provider.infer(question, &self.current_context) {
            Ok(extraction) => {
                // Inclusive comparison: a score exactly at the
                // threshold counts as answered
                if extraction.score >= self.score_threshold {
                    AnswerReport::Answered {
                        answer:     extraction.text,
                        confidence: extraction.score,
                    }
                } else {
                    tracing::debug!(
                        "rejected candidate '{}' at {:.4} (threshold {:.4})",
                        extraction.text, extraction.score, self.score_threshold
                    );
                    AnswerReport::Rejected { confidence: extraction.score }
                }
            }
            Err(e) => AnswerReport::InferenceFailure { reason: format!("{e:#}") },
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use crate::domain::extraction::Extraction;

    /// Always returns the same (text, score), whatever is asked.
    struct ScriptedProvider {
        text:  &'static str,
        score: f32,
    }

    impl AnswerProvider for ScriptedProvider {
        fn infer(&self, _question: &str, _context: &str) -> Result<Extraction> {
            Ok(Extraction::new(self.text, self.score))
        }
        fn name(&self) -> &str {
            "scripted"
        }
    }

    /// Returns the context it was handed as the answer text —
    /// lets tests observe which context actually reached the
    /// provider.
    struct EchoContextProvider;

    impl AnswerProvider for EchoContextProvider {
        fn infer(&self, _question: &str, context: &str) -> Result<Extraction> {
            Ok(Extraction::new(context, 0.99))
        }
        fn name(&self) -> &str {
            "echo"
        }
    }

    struct FailingProvider;

    impl AnswerProvider for FailingProvider {
        fn infer(&self, _question: &str, _context: &str) -> Result<Extraction> {
            anyhow::bail!("simulated inference crash")
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    fn ready_session(text: &'static str, score: f32, threshold: f32) -> QaSession {
        QaSession::with_provider(Box::new(ScriptedProvider { text, score }), threshold)
    }

    #[test]
    fn test_degraded_session_always_reports_model_unavailable() {
        let mut s = QaSession::assemble(None, 0.8);
        assert!(!s.is_ready());

        // Even with a context set, the provider check comes first
        s.set_context("some context");
        assert_eq!(s.answer_question("anything?"), AnswerReport::ModelUnavailable);
        assert_eq!(s.answer_question("anything else?"), AnswerReport::ModelUnavailable);
    }

    #[test]
    fn test_empty_context_reports_no_context_set() {
        let s = ready_session("answer", 0.99, 0.8);
        assert!(s.is_ready());
        assert_eq!(s.answer_question("anything?"), AnswerReport::NoContextSet);
    }

    #[test]
    fn test_high_confidence_is_answered() {
        let mut s = ready_session("December 2021", 0.95, 0.8);
        s.set_context("JWST is a large infrared observatory launched in December 2021.");

        let report = s.answer_question("When was it launched?");
        assert_eq!(
            report,
            AnswerReport::Answered { answer: "December 2021".into(), confidence: 0.95 }
        );
        assert!(report.to_string().contains("95.00%"));
    }

    #[test]
    fn test_low_confidence_is_rejected_and_text_discarded() {
        let mut s = ready_session("a bad guess", 0.12, 0.8);
        s.set_context("some unrelated context");

        let report = s.answer_question("How many astronauts operate it?");
        assert_eq!(report, AnswerReport::Rejected { confidence: 0.12 });
        // The candidate span must never surface to the user
        assert!(!report.to_string().contains("a bad guess"));
    }

    #[test]
    fn test_score_exactly_at_threshold_is_answered() {
        let mut s = ready_session("boundary", 0.8, 0.8);
        s.set_context("ctx");
        assert!(s.answer_question("q?").is_answered());
    }

    #[test]
    fn test_score_just_below_threshold_is_rejected() {
        let mut s = ready_session("nearly", 0.7999, 0.8);
        s.set_context("ctx");
        assert!(!s.answer_question("q?").is_answered());
    }

    #[test]
    fn test_provider_failure_becomes_inference_failure_report() {
        let mut s = QaSession::with_provider(Box::new(FailingProvider), 0.8);
        s.set_context("ctx");

        match s.answer_question("q?") {
            AnswerReport::InferenceFailure { reason } => {
                assert!(reason.contains("simulated inference crash"));
            }
            other => panic!("expected InferenceFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_set_context_overwrites_wholesale() {
        let mut s = QaSession::with_provider(Box::new(EchoContextProvider), 0.5);

        s.set_context("context A");
        s.set_context("context B");

        // After setting A then B, only B reaches the provider
        match s.answer_question("q?") {
            AnswerReport::Answered { answer, .. } => assert_eq!(answer, "context B"),
            other => panic!("expected Answered, got {:?}", other),
        }
    }

    #[test]
    fn test_answering_does_not_mutate_the_session() {
        let mut s = ready_session("stable", 0.9, 0.8);
        s.set_context("fixed context");

        let first  = s.answer_question("q?");
        let second = s.answer_question("q?");
        assert_eq!(first, second);
    }
}
