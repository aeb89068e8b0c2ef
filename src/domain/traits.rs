// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The helpers in this crate never talk to a concrete model,
// plotting backend or GPU driver. They talk to these traits:
//
//   LanguageModel    — anything that can score phoneme sequences
//   ChartRenderer    — anything that can draw a BarChart
//   AcceleratorProbe — anything that can say whether a GPU exists
//
// Tests plug in small fakes; the CLI plugs in the bigram model,
// the text/JSON renderers and the system probe.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::collections::HashMap;
use anyhow::Result;

use crate::analysis::chart::BarChart;
use crate::domain::pronunciation::Pronunciation;

// ─── LanguageModel ────────────────────────────────────────────────────────────
/// A phoneme language model.
///
/// Implementations:
///   - BigramModel → add-k smoothed bigram counts over a corpus
///   - (external) a trained recurrent network
pub trait LanguageModel {
    /// Distribution over the next symbol given the pronunciation so far.
    /// Includes the end symbol. Values are trusted, not normalised.
    fn next_probabilities(&self, pronunciation: &[String]) -> Result<HashMap<String, f64>>;

    /// P(symbol_i | symbols_0..i) for each position, followed by the
    /// probability of the end symbol. Length must be `pronunciation.len() + 1`.
    fn conditional_probabilities_of_text(&self, pronunciation: &[String]) -> Result<Vec<f64>>;

    /// The symbol this model uses to mark the end of a pronunciation
    fn end_symbol(&self) -> &str;
}

// ─── ChartRenderer ────────────────────────────────────────────────────────────
/// Any backend that can draw a labelled bar chart.
///
/// Implementations:
///   - TextRenderer → ASCII bars on any io::Write
///   - JsonRenderer → the chart as one JSON document
pub trait ChartRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        (**self).render(chart)
    }
}

// ─── AcceleratorProbe ─────────────────────────────────────────────────────────
/// Reports whether a CUDA-class accelerator can be used.
pub trait AcceleratorProbe {
    fn accelerator_available(&self) -> bool;
}

/// A fixed answer — handy for tests and for forcing CPU runs
impl AcceleratorProbe for bool {
    fn accelerator_available(&self) -> bool {
        *self
    }
}

// ─── PronunciationSource ──────────────────────────────────────────────────────
/// Any component that can load a pronunciation corpus.
///
/// Implementations:
///   - PronunciationLoader → one pronunciation per line of a text file
pub trait PronunciationSource {
    fn load_all(&self) -> Result<Vec<Pronunciation>>;
}
