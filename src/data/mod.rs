// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything between a file on disk and a
// context string the session can answer questions against.
//
// The pipeline flows in this order:
//
//   context file (.docx or plain text)
//       │
//       ▼
//   DocumentLoader    → reads the file, extracts raw text
//       │
//       ▼
//   Preprocessor      → cleans text (whitespace, encoding)
//       │
//       ▼
//   QaSession context → one flat string, set wholesale
//
// The ContextWindower lives here too: the provider uses it at
// inference time to slide over contexts longer than the model's
// input capacity.
//
// Each module is responsible for exactly one step, which makes
// each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads a single context document (.docx via docx-rs, or plain text)
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod preprocessor;

/// Splits long contexts into overlapping word windows
pub mod chunker;
