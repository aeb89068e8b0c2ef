// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers that don't belong to any single layer:
//
//   metrics.rs  — early-stopping trend over a score history,
//                 and numeric truncation
//
//   renderer.rs — ChartRenderer backends (ASCII text, JSON)
//
// Reference: Rust Book §7 (Modules)

/// Score history trend and numeric truncation
pub mod metrics;

/// Text and JSON chart renderers
pub mod renderer;
