// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches collections of pronunciations:
//
//   corpus .txt file
//       │
//       ▼
//   PronunciationLoader → one Pronunciation per line
//       │
//       ▼
//   split_data          → seeded train / dev / test partition
//       │
//       ▼
//   (model trained and sampled elsewhere)
//       │
//       ▼
//   count_origins       → how much generated output is memorised
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads and writes line-based pronunciation corpora
pub mod loader;

/// Shuffles and splits data into train/dev/test sets
pub mod splitter;

/// Classifies generated pronunciations by where they came from
pub mod origins;
