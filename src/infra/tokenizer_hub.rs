// ============================================================
// Layer 5 — Tokenizer Hub
// ============================================================
// Resolves a pretrained tokenizer from a model identifier.
//
// The identifier is a plain string naming a model on the
// HuggingFace hub (e.g. "microsoft/CodeGPT-small-java-adaptedGPT2").
// It is deliberately kept distinct from any loaded model
// instance — this crate only ever needs the IDENTIFIER, to
// fetch the matching tokenizer. No model weights are loaded
// anywhere in the pipeline.
//
// Acquisition is a one-time blocking operation at the start of
// a `prepare` run. The download goes through the tokenizers
// crate's `http` feature; a bad identifier or a network
// failure surfaces as PrepError::External.
//
// Truncation is configured here, once, right after loading:
// every later encode call truncates to `max_seq_len` without
// the encoder having to think about it.
//
// Reference: tokenizers crate documentation (from_pretrained)

use tokenizers::{Tokenizer, TruncationParams};

use crate::domain::error::PrepError;

/// Fetch the tokenizer for `model_id` from the model hub and
/// configure it to truncate to `max_seq_len` tokens.
pub fn pretrained_tokenizer(
    model_id: &str,
    max_seq_len: usize,
) -> Result<Tokenizer, PrepError> {
    tracing::info!("Resolving tokenizer for model '{model_id}'");

    // One-time blocking hub download (cached by the framework)
    let mut tokenizer = Tokenizer::from_pretrained(model_id, None).map_err(|e| {
        PrepError::External(format!("cannot resolve tokenizer '{model_id}': {e}"))
    })?;

    // Truncate every encoding to the model's maximum sequence
    // length; remaining params keep the framework defaults
    // (longest-first over the pair)
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_seq_len,
            ..Default::default()
        }))
        .map_err(|e| {
            PrepError::External(format!("cannot configure truncation: {e}"))
        })?;

    tracing::info!("Tokenizer ready (truncation at {max_seq_len} tokens)");
    Ok(tokenizer)
}
