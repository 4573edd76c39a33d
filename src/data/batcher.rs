// ============================================================
// Layer 4 — Fix Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<FixSample>
// into model-ready tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor. This is necessary because
//   accelerators are most efficient when processing many
//   samples at once.
//
// How batching works here:
//   Input:  Vec of N FixSamples with VARYING sequence lengths
//   Output: FixBatch with tensors of shape [N, S] where S is
//           the longest sequence in THIS batch
//
// Samples come out of the encoder truncated but unpadded, so
// this batcher does dynamic padding: every sequence is
// extended to the batch maximum with pad id 0, and the
// attention mask gets a 0 for every padded position so the
// model ignores it.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::FixSample;

/// Token id used to pad sequences to the batch length
const PAD_ID: i32 = 0;

// ─── FixBatch ─────────────────────────────────────────────────────────────────
/// A batch of tokenized bug-fix examples ready for a model
/// forward pass. All tensors have batch_size as their first
/// dimension.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) —
/// generic so the same batcher works on any device.
#[derive(Debug, Clone)]
pub struct FixBatch<B: Backend> {
    /// Token ID sequences — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Attention masks — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub attention_mask: Tensor<B, 2, Int>,
}

// ─── FixBatcher ───────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct GPU/CPU.
#[derive(Clone, Debug)]
pub struct FixBatcher<B: Backend> {
    /// The device to create tensors on (e.g. GPU index 0)
    pub device: B::Device,
}

impl<B: Backend> FixBatcher<B> {
    /// Create a new batcher for the given device
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes FixBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch.
impl<B: Backend> Batcher<FixSample, FixBatch<B>> for FixBatcher<B> {
    /// Convert a Vec of FixSamples into a single FixBatch.
    ///
    /// Steps:
    ///   1. Find the longest sequence in the batch
    ///   2. Pad every id sequence to that length with PAD_ID
    ///      and every mask with 0
    ///   3. Flatten into one Vec<i32> per field
    ///   4. Create 1D tensors and reshape to [batch, seq]
    fn batch(&self, items: Vec<FixSample>) -> FixBatch<B> {
        let batch_size = items.len();

        // Longest sequence in THIS batch decides the padded width
        let seq_len = items
            .iter()
            .map(|s| s.input_ids.len())
            .max()
            .unwrap_or(0);

        // ── Pad and flatten input_ids ─────────────────────────────────────────
        // Vec<Vec<u32>> → Vec<i32> (Burn uses i32 for Int tensors)
        let mut input_flat = Vec::with_capacity(batch_size * seq_len);
        let mut mask_flat  = Vec::with_capacity(batch_size * seq_len);

        for sample in &items {
            let real = sample.input_ids.len();

            input_flat.extend(sample.input_ids.iter().map(|&x| x as i32));
            input_flat.extend(std::iter::repeat(PAD_ID).take(seq_len - real));

            // Mask: tokenizer's mask for real positions, 0 for padding
            mask_flat.extend(sample.attention_mask.iter().map(|&x| x as i32));
            mask_flat.extend(std::iter::repeat(0).take(seq_len - real));
        }

        // ── Create tensors ────────────────────────────────────────────────────
        // Tensor::from_ints creates a 1D tensor from a slice,
        // then .reshape() gives it the 2D shape [batch, seq]

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        FixBatch { input_ids, attention_mask }
    }
}
