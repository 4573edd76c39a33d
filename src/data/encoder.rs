// ============================================================
// Layer 4 — Fix Encoder
// ============================================================
// The tokenization boundary of the pipeline.
//
// Contract with the external tokenizer (and nothing more):
//   - supply the two text fields of each ProjectedRecord as a
//     sequence PAIR: (before, after)
//   - truncation to the model's maximum sequence length was
//     already configured on the tokenizer by Layer 5
//   - take back token ids and attention mask exactly as the
//     framework produced them
//
// The encoder never inspects or validates the returned ids —
// their schema (special tokens, type ids, padding id) is owned
// by the tokenizer, not by this crate. They are passed through
// into FixSample untouched.
//
// Encoding the pair rather than a concatenated string lets the
// tokenizer insert its own separator convention between the
// buggy and the fixed snippet, the same way HuggingFace
// handles (sentence_a, sentence_b) inputs.
//
// Reference: tokenizers crate documentation (EncodeInput)

use tokenizers::Tokenizer;

use crate::data::dataset::FixSample;
use crate::domain::error::PrepError;
use crate::domain::projected_record::ProjectedRecord;

/// Wraps a configured tokenizer and turns projected records
/// into model-input samples.
pub struct FixEncoder {
    tokenizer: Tokenizer,
}

impl FixEncoder {
    /// Create an encoder around an already-configured tokenizer
    /// (truncation set up, vocabulary loaded).
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Encode every projected record, in order, one sample per
    /// record. Any tokenizer failure is an External error —
    /// the record index is included so the input can be found.
    pub fn encode_records(
        &self,
        records: &[ProjectedRecord],
    ) -> Result<Vec<FixSample>, PrepError> {
        let mut samples = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            // (before, after) as a sequence pair — the tokenizer
            // owns the separator and special-token layout
            let encoding = self
                .tokenizer
                .encode((record.before.as_str(), record.after.as_str()), true)
                .map_err(|e| {
                    PrepError::External(format!("encoding record {index}: {e}"))
                })?;

            samples.push(FixSample {
                input_ids:      encoding.get_ids().to_vec(),
                attention_mask: encoding.get_attention_mask().to_vec(),
                commit:         record.commit_num.clone(),
            });
        }

        tracing::info!("Encoded {} samples", samples.len());
        Ok(samples)
    }
}
