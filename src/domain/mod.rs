// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types and traits describing the experiment:
// pronunciations, the errors our helpers can raise, and the
// seams to the outside world (language model, chart renderer,
// accelerator probe).
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A phoneme sequence for one word
pub mod pronunciation;

// Typed errors raised by the helpers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
