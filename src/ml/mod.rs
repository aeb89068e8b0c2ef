// ============================================================
// Layer 5 — ML Layer (Burn)
// ============================================================
// Model-side helpers. Only this layer imports from burn.
//
//   cell.rs   — recurrent cell kinds (rnn / lstm / gru) and the
//               layers they build
//
//   device.rs — cpu / cuda selection mapped onto WGPU devices
//
//   bigram.rs — a small reference LanguageModel for driving the
//               introspection charts from a corpus
//
// Reference: Burn Book §3 (Building Blocks)

/// Recurrent cell lookup and construction
pub mod cell;

/// Compute device selection
pub mod device;

/// Add-k smoothed phoneme bigram model
pub mod bigram;
