// ============================================================
// Layer 4 — Context Document Loader
// ============================================================
// Loads the single document whose text becomes the session
// context. Two formats are supported, dispatched on extension:
//
//   .docx       — parsed with the docx-rs crate. A .docx file
//                 is actually a ZIP archive of XML files;
//                 docx-rs gives us a typed Rust API over it.
//                 The path to the words is:
//                   Document → Paragraph → Run → Text
//   everything
//   else        — read as UTF-8 plain text
//
// Reference: docx-rs crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};
use docx_rs::read_docx;

use crate::domain::document::ContextDocument;
use crate::domain::traits::ContextSource;

/// Loads one context document from a file path.
/// Implements the ContextSource trait from Layer 3.
pub struct DocumentLoader {
    path: PathBuf,
}

impl DocumentLoader {
    /// Create a new DocumentLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_docx(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("docx"))
            .unwrap_or(false)
    }
}

impl ContextSource for DocumentLoader {
    fn load(&self) -> Result<ContextDocument> {
        let text = if self.is_docx() {
            extract_docx_text(&self.path)?
        } else {
            fs::read_to_string(&self.path)
                .with_context(|| format!("Cannot read context file '{}'", self.path.display()))?
        };

        let source = self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        tracing::debug!("Loaded context '{}' ({} chars)", source, text.len());
        Ok(ContextDocument::new(source, text))
    }
}

/// Parse a .docx file and return its paragraph text joined with
/// newlines. Tables, images and section breaks are ignored — only
/// paragraph runs carry the words we care about.
fn extract_docx_text(path: &Path) -> Result<String> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    // The raw bytes of a .docx are a ZIP archive
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("docx parse error in '{}': {:?}", path.display(), e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            // Runs within one paragraph are parts of the same
            // sentence, so they concatenate with no separator
            let mut parts: Vec<String> = Vec::new();
            for pc in &para.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(t) = rc {
                            parts.push(t.text.clone());
                        }
                    }
                }
            }
            let para_text = parts.join("");
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_plain_text_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.txt");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "JWST is an infrared observatory.").unwrap();

        let doc = DocumentLoader::new(&path).load().unwrap();
        assert_eq!(doc.source, "context.txt");
        assert!(doc.text.contains("infrared observatory"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = DocumentLoader::new("no/such/context.txt");
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_extension_dispatch_is_case_insensitive() {
        assert!(DocumentLoader::new("a.DOCX").is_docx());
        assert!(DocumentLoader::new("a.docx").is_docx());
        assert!(!DocumentLoader::new("a.txt").is_docx());
        assert!(!DocumentLoader::new("noextension").is_docx());
    }
}
