// ============================================================
// Layer 6 — Model Store
// ============================================================
// Resolves a provider name to its model directory and restores
// the pre-trained model from it.
//
// Burn's CompactRecorder:
//   - Serialises model parameters in MessagePack format
//   - Compresses with gzip (the .mpk.gz file)
//   - Type-safe: loading fails if the architecture of the model
//     being loaded into doesn't match what was recorded
//
// File layout per provider:
//   models/<name>/model.json     — ModelManifest (architecture)
//   models/<name>/model.mpk.gz   — weights
//
// Binding is strictly read-only: nothing in this process ever
// writes a model directory. Directories are produced offline by
// the training/export tooling that ships the pre-trained model.

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{Deserialize, Serialize};

use crate::ml::model::{SpanQaConfig, SpanQaModel};

const MANIFEST_FILE: &str = "model.json";
const WEIGHTS_STEM:  &str = "model";

/// The architecture a model directory was exported with.
/// Everything the inferencer needs to rebuild the model shape
/// before loading weights into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    pub vocab_size:  usize,
    pub max_seq_len: usize,
    pub d_model:     usize,
    pub num_heads:   usize,
    pub num_layers:  usize,
    pub d_ff:        usize,
}

impl ModelManifest {
    /// Build the Burn config for this architecture. Dropout is
    /// pinned to 0.0 — it only exists at training time.
    pub fn to_config(&self) -> SpanQaConfig {
        SpanQaConfig::new(
            self.vocab_size, self.max_seq_len, self.d_model,
            self.num_heads, self.num_layers, self.d_ff, 0.0,
        )
    }
}

/// Read-only access to one provider's model directory.
#[derive(Debug)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Resolve a provider name under the models root.
    /// Fails if no model directory exists for that name — the
    /// caller treats this as a provider-binding failure, not a
    /// reason to create anything.
    pub fn resolve(models_root: &Path, name: &str) -> Result<Self> {
        let dir = models_root.join(name);
        if !dir.is_dir() {
            anyhow::bail!(
                "unknown provider '{}': no model directory at '{}'",
                name,
                dir.display()
            );
        }
        Ok(Self { dir })
    }

    /// The resolved model directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the architecture manifest from model.json.
    pub fn manifest(&self) -> Result<ModelManifest> {
        let path = self.dir.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read model manifest '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed model manifest '{}'", path.display()))
    }

    /// Load the pre-trained weights into a freshly built model.
    ///
    /// The model parameter must have the architecture the manifest
    /// describes, or deserialisation fails.
    pub fn load_weights<B: Backend>(
        &self,
        model:  SpanQaModel<B>,
        device: &B::Device,
    ) -> Result<SpanQaModel<B>> {
        // CompactRecorder appends the .mpk.gz extension itself
        let path = self.dir.join(WEIGHTS_STEM);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load model weights '{}'. Is the pre-trained model installed?",
                    path.display()
                )
            })?;

        // load_record() returns a new model with the loaded weights
        Ok(model.load_record(record))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_unknown_provider() {
        let root = tempfile::tempdir().unwrap();
        let err  = ModelStore::resolve(root.path(), "no-such-model").unwrap_err();
        assert!(err.to_string().contains("unknown provider"));
    }

    #[test]
    fn test_manifest_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let dir  = root.path().join("tiny-qa");
        fs::create_dir_all(&dir).unwrap();

        let manifest = ModelManifest {
            vocab_size:  30522,
            max_seq_len: 512,
            d_model:     256,
            num_heads:   8,
            num_layers:  6,
            d_ff:        1024,
        };
        fs::write(
            dir.join(MANIFEST_FILE),
            serde_json::to_string_pretty(&manifest).unwrap(),
        ).unwrap();

        let store  = ModelStore::resolve(root.path(), "tiny-qa").unwrap();
        let loaded = store.manifest().unwrap();
        assert_eq!(loaded.max_seq_len, 512);
        assert_eq!(loaded.num_layers, 6);
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("empty-model")).unwrap();

        let store = ModelStore::resolve(root.path(), "empty-model").unwrap();
        assert!(store.manifest().is_err());
    }
}
