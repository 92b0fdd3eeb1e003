// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// One-off question answering:
//   1. Bind a session for the requested provider
//   2. Load the context document (.docx or plain text)
//   3. Clean the extracted text and set it as the context
//   4. Answer the single question and print the Q/A pair
//
// Unlike the demo, a degraded session here IS a process error:
// the caller asked for exactly one answer, and there is nothing
// useful to print instead.

use anyhow::Result;
use std::path::Path;

use crate::application::session::QaSession;
use crate::data::{loader::DocumentLoader, preprocessor::Preprocessor};
use crate::domain::traits::ContextSource;

pub struct AskUseCase {
    session: QaSession,
}

impl AskUseCase {
    pub fn new(models_root: &Path, provider_name: &str, score_threshold: f32) -> Self {
        Self {
            session: QaSession::create(models_root, provider_name, score_threshold),
        }
    }

    /// Answer `question` against the document at `context_file`.
    pub fn execute(&mut self, question: &str, context_file: &Path) -> Result<()> {
        if !self.session.is_ready() {
            anyhow::bail!("answer provider failed to load — see the log output above");
        }

        let doc = DocumentLoader::new(context_file).load()?;
        tracing::info!("Answering against context '{}'", doc.source);

        // Cleaning happens here, before the context is set —
        // set_context itself stores verbatim
        let context = Preprocessor::new().clean(&doc.text);
        self.session.set_context(context);

        let report = self.session.answer_question(question);
        println!("Q: {question}");
        println!("A: {report}");
        Ok(())
    }
}
