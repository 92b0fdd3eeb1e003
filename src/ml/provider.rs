// ============================================================
// Layer 5 — Transformer QA Provider
// ============================================================
// The concrete AnswerProvider. Binding resolves a provider name
// to a model directory, rebuilds the architecture from the
// manifest, and loads weights + tokenizer. Inference encodes
//
//   [CLS] question [SEP] context [SEP]
//
// runs one forward pass, and searches the context region for the
// (start, end) token pair with the highest joint probability.
// The confidence reported to the session is that joint softmax
// probability — start_prob * end_prob of the winning span.
//
// Contexts longer than the model's input capacity are slid over
// with overlapping word windows; each window is scored
// independently and the best span across windows wins.

use anyhow::Result;
use burn::prelude::*;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::data::chunker::ContextWindower;
use crate::domain::extraction::Extraction;
use crate::domain::traits::AnswerProvider;
use crate::infra::{model_store::ModelStore, tokenizer_store::TokenizerStore};
use crate::ml::model::SpanQaModel;

type InferBackend = burn::backend::Wgpu;

// Answer spans longer than this are noise, not answers
const MAX_ANSWER_LEN: usize = 30;

pub struct TransformerQaProvider {
    name:        String,
    model:       SpanQaModel<InferBackend>,
    tokenizer:   Tokenizer,
    max_seq_len: usize,
    device:      burn::backend::wgpu::WgpuDevice,
}

impl TransformerQaProvider {
    /// Bind the provider identified by `name` under `models_root`.
    /// Any failure here (missing directory, bad manifest, weight or
    /// tokenizer mismatch) is returned to the caller; the session
    /// turns it into its permanently degraded state.
    pub fn bind(models_root: &Path, name: &str) -> Result<Self> {
        let store     = ModelStore::resolve(models_root, name)?;
        let manifest  = store.manifest()?;
        let tokenizer = TokenizerStore::new(store.dir()).load()?;

        let device = burn::backend::wgpu::WgpuDevice::default();
        let model: SpanQaModel<InferBackend> = manifest.to_config().init(&device);
        let model = store.load_weights(model, &device)?;

        tracing::info!(
            "Provider '{}' bound (max_seq_len={}, {} encoder layers)",
            name, manifest.max_seq_len, manifest.num_layers
        );

        Ok(Self {
            name:        name.to_string(),
            model,
            tokenizer,
            max_seq_len: manifest.max_seq_len,
            device,
        })
    }

    /// Word-window geometry for contexts that exceed the model
    /// input. Half the sequence length in words is a conservative
    /// fit for [CLS] + question + both [SEP]s even with subword
    /// splitting; a quarter of overlap keeps boundary spans whole.
    fn windower(&self) -> ContextWindower {
        let window  = (self.max_seq_len / 2).max(2);
        let overlap = window / 4;
        ContextWindower::new(window, overlap)
    }

    /// Run one forward pass against a single context window and
    /// return the best span in it.
    fn infer_window(&self, question: &str, context: &str) -> Result<Extraction> {
        let cls_id = self.tokenizer.token_to_id("[CLS]").unwrap_or(101);
        let sep_id = self.tokenizer.token_to_id("[SEP]").unwrap_or(102);

        // Build [CLS] question [SEP] context [SEP]
        let q_enc = self.tokenizer.encode(question, false)
            .map_err(|e| anyhow::anyhow!("question tokenise: {e}"))?;
        let c_enc = self.tokenizer.encode(context, false)
            .map_err(|e| anyhow::anyhow!("context tokenise: {e}"))?;

        let mut input_ids: Vec<u32> = vec![cls_id];
        input_ids.extend_from_slice(q_enc.get_ids());
        input_ids.push(sep_id);
        let context_start = input_ids.len();
        input_ids.extend_from_slice(c_enc.get_ids());
        input_ids.push(sep_id);
        input_ids.truncate(self.max_seq_len);
        let seq_len = input_ids.len();
        while input_ids.len() < self.max_seq_len { input_ids.push(0); }

        if context_start >= seq_len {
            anyhow::bail!("question fills the whole input window — no room for context tokens");
        }

        // Forward pass
        let input_flat: Vec<i32> = input_ids.iter().map(|&x| x as i32).collect();
        let input_tensor = Tensor::<InferBackend, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device,
        ).unsqueeze::<2>();

        let output       = self.model.forward(input_tensor);
        let start_logits = output.start_logits.squeeze::<1>(0);
        let end_logits   = output.end_logits.squeeze::<1>(0);
        let start_logits = start_logits.slice([0..seq_len]);
        let end_logits   = end_logits.slice([0..seq_len]);

        // Softmax probabilities
        let start_probs: Vec<f32> = burn::tensor::activation::softmax(
            start_logits.unsqueeze::<2>(), 1,
        ).squeeze::<1>(0).into_data().to_vec::<f32>().unwrap_or_default();

        let end_probs: Vec<f32> = burn::tensor::activation::softmax(
            end_logits.unsqueeze::<2>(), 1,
        ).squeeze::<1>(0).into_data().to_vec::<f32>().unwrap_or_default();

        // Best valid span: start and end inside the context region,
        // end not before start, span bounded by MAX_ANSWER_LEN
        let mut best_score = f32::NEG_INFINITY;
        let mut best_start = context_start;
        let mut best_end   = context_start;

        for s in context_start..seq_len {
            for e in s..(s + MAX_ANSWER_LEN).min(seq_len) {
                let score = start_probs[s] * end_probs[e];
                if score > best_score {
                    best_score = score;
                    best_start = s;
                    best_end   = e;
                }
            }
        }

        let answer_ids: Vec<u32> = input_ids[best_start..=best_end].to_vec();
        let answer = self.tokenizer.decode(&answer_ids, true)
            .map_err(|e| anyhow::anyhow!("decode: {e}"))?;

        // Strip any special tokens that survived decoding
        let answer = answer
            .replace("[CLS]", "")
            .replace("[SEP]", "")
            .replace("[PAD]", "")
            .trim()
            .to_string();

        tracing::debug!("span [{},{}] conf={:.4} answer='{}'",
            best_start, best_end, best_score, answer);

        Ok(Extraction::new(answer, best_score))
    }
}

impl AnswerProvider for TransformerQaProvider {
    fn infer(&self, question: &str, context: &str) -> Result<Extraction> {
        let windows = self.windower().windows(context);

        let mut best: Option<Extraction> = None;
        let mut last_err = None;

        for window in &windows {
            match self.infer_window(question, window) {
                Ok(extraction) => {
                    let better = best
                        .as_ref()
                        .map(|b| extraction.score > b.score)
                        .unwrap_or(true);
                    if better {
                        best = Some(extraction);
                    }
                }
                Err(e) => {
                    tracing::warn!("inference error on one context window: {e}");
                    last_err = Some(e);
                }
            }
        }

        match best {
            Some(extraction) => Ok(extraction),
            None => Err(last_err.unwrap_or_else(|| {
                anyhow::anyhow!("context produced no inferable window")
            })),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
