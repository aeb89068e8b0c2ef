// ============================================================
// Layer 5 — Model Introspection
// ============================================================
// Turns language-model queries into chart values.
//
//   chart.rs — the BarChart value object handed to renderers
//   plots.rs — next-phoneme distribution and per-phoneme
//              probability of a whole pronunciation
//
// Nothing here draws. A chart is built, returned, and then given
// to whatever ChartRenderer the caller owns, so there is no
// hidden "current figure" shared between calls.

/// Bar chart value object
pub mod chart;

/// Chart builders that query a LanguageModel
pub mod plots;
