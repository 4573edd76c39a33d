// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting concern that doesn't belong in
// any specific business layer:
//
//   tokenizer_hub.rs — Pretrained tokenizer acquisition
//                      Resolves a model identifier against the
//                      HuggingFace hub, downloads the matching
//                      tokenizer, and configures truncation to
//                      the model's maximum sequence length.
//
// Why is this a separate layer?
//   Hub access is the only network-facing piece of the whole
//   pipeline. Keeping it here:
//   - Leaves the data layer free of network concerns
//   - Makes it easy to swap implementations
//     (e.g. a local tokenizer.json file instead of the hub)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pretrained tokenizer download and truncation setup
pub mod tokenizer_hub;
