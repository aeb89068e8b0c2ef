// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Fits the bigram reference model on a corpus, then draws the
// introspection charts for pronunciations the user asks about:
//
//   Step 1: Load the corpus           (Layer 4 - data)
//   Step 2: Fit the bigram model      (Layer 5 - ml)
//   Step 3: Build + render the chart  (Layer 5 - analysis, Layer 6 - infra)
//
// The renderer is passed in by the caller (CLI prints to stdout,
// tests render into a Vec).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::plots::{
    plot_next_phoneme_distribution, plot_pronunciation_probability, DEFAULT_MIN_PROBABILITY,
};
use crate::data::loader::PronunciationLoader;
use crate::domain::pronunciation::Pronunciation;
use crate::domain::traits::{ChartRenderer, PronunciationSource};
use crate::ml::bigram::BigramModel;

// ─── Inspect Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub corpus:          PathBuf,
    /// Add-k smoothing constant for the bigram model
    pub smoothing:       f64,
    pub min_probability: f64,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            corpus:          PathBuf::from("data/pronunciations.txt"),
            smoothing:       0.1,
            min_probability: DEFAULT_MIN_PROBABILITY,
        }
    }
}

pub struct InspectUseCase {
    config: InspectConfig,
    model:  BigramModel,
}

impl InspectUseCase {
    /// Load the corpus and fit the model
    pub fn new(config: InspectConfig) -> Result<Self> {
        tracing::info!("Fitting bigram model on '{}'", config.corpus.display());
        let corpus = PronunciationLoader::new(&config.corpus).load_all()?;
        let model  = BigramModel::train(&corpus, config.smoothing);
        tracing::info!(
            "Model ready: {} pronunciations, {} phonemes",
            corpus.len(),
            model.phonemes().len()
        );
        Ok(Self { config, model })
    }

    pub fn model(&self) -> &BigramModel {
        &self.model
    }

    /// Render the next-phoneme distribution. Returns false if nothing
    /// cleared the probability threshold.
    pub fn next_phoneme(
        &self,
        pronunciation: &Pronunciation,
        renderer:      &mut impl ChartRenderer,
    ) -> Result<bool> {
        plot_next_phoneme_distribution(
            &self.model,
            pronunciation,
            self.config.min_probability,
            renderer,
        )
    }

    /// Render the per-phoneme probability of a whole pronunciation
    pub fn word_probability(
        &self,
        pronunciation: &Pronunciation,
        renderer:      &mut impl ChartRenderer,
    ) -> Result<()> {
        plot_pronunciation_probability(&self.model, pronunciation, renderer)
    }
}
