// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for each CLI workflow.
//
// Rules for this layer:
//   - No model math here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Corpus → train / dev / test files
pub mod split_use_case;

// Generated vs train / dev memorisation report
pub mod origins_use_case;

// Bigram model + introspection charts
pub mod inspect_use_case;
