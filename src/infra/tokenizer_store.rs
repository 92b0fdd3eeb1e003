// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the tokenizer that ships alongside a model's weights.
// The two must agree on vocabulary: token IDs produced here are
// row indices into the model's embedding table, so a mismatched
// tokenizer silently ruins every prediction. That is why the
// tokenizer lives IN the model directory rather than in some
// shared location.
//
// The file is tokenizer.json in HuggingFace format, which the
// tokenizers crate loads directly.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the tokenizer.json from the model directory.
    /// Tokenizer::from_file returns a boxed error that is not
    /// Send + Sync, hence the map into anyhow instead of `?`.
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");
        Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}. \
                 The model directory must contain the tokenizer it was trained with.",
                path.display(),
                e
            )
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tokenizer_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = TokenizerStore::new(dir.path());
        let err   = store.load().unwrap_err();
        assert!(err.to_string().contains("Cannot load tokenizer"));
    }
}
