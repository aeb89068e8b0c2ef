// ============================================================
// Layer 5 — Bigram Reference Model
// ============================================================
// A tiny add-k smoothed bigram model over phonemes. It exists so
// the introspection charts can be produced from the command line
// against any corpus, without loading a trained network.
//
// Every pronunciation is read as
//
//   <START> p_0 p_1 ... p_n <END>
//
// and we count each adjacent pair. Then
//
//   P(next | prev) = (count(prev, next) + k) / (count(prev, ·) + k·V)
//
// where V is the number of phonemes plus one for <END>.
// <START> is only ever a context, <END> only ever a target.
//
// Reference: Jurafsky & Martin, Speech and Language Processing §3

use std::collections::{BTreeSet, HashMap};
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::UtilsError;
use crate::domain::pronunciation::Pronunciation;
use crate::domain::traits::LanguageModel;

pub const START: &str = "<START>";
pub const END:   &str = "<END>";

/// Add-k smoothed phoneme bigram model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigramModel {
    /// Known phonemes, sorted (excludes <START> and <END>)
    phonemes: Vec<String>,
    /// count(prev, next)
    pair_counts: HashMap<String, HashMap<String, usize>>,
    /// count(prev, ·)
    context_totals: HashMap<String, usize>,
    smoothing: f64,
}

impl BigramModel {
    /// Count bigrams over `corpus` with add-`smoothing` estimates.
    pub fn train(corpus: &[Pronunciation], smoothing: f64) -> Self {
        let phonemes: BTreeSet<&String> = corpus.iter().flat_map(|p| p.iter()).collect();

        let mut pair_counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
        let mut context_totals: HashMap<String, usize> = HashMap::new();

        for p in corpus {
            let contexts = std::iter::once(START).chain(p.iter().map(String::as_str));
            let targets  = p.iter().map(String::as_str).chain(std::iter::once(END));
            for (prev, next) in contexts.zip(targets) {
                *pair_counts
                    .entry(prev.to_string())
                    .or_default()
                    .entry(next.to_string())
                    .or_default() += 1;
                *context_totals.entry(prev.to_string()).or_default() += 1;
            }
        }

        tracing::debug!(
            "Trained bigram model: {} pronunciations, {} phonemes",
            corpus.len(),
            phonemes.len()
        );

        Self {
            phonemes: phonemes.into_iter().cloned().collect(),
            pair_counts,
            context_totals,
            smoothing,
        }
    }

    /// The phoneme inventory seen in training, sorted
    pub fn phonemes(&self) -> &[String] {
        &self.phonemes
    }

    fn is_phoneme(&self, symbol: &str) -> bool {
        self.phonemes.binary_search_by(|p| p.as_str().cmp(symbol)).is_ok()
    }

    fn check_context(&self, symbol: &str) -> Result<(), UtilsError> {
        if symbol == START || self.is_phoneme(symbol) {
            Ok(())
        } else {
            Err(UtilsError::UnknownPhoneme(symbol.to_string()))
        }
    }

    fn check_target(&self, symbol: &str) -> Result<(), UtilsError> {
        if symbol == END || self.is_phoneme(symbol) {
            Ok(())
        } else {
            Err(UtilsError::UnknownPhoneme(symbol.to_string()))
        }
    }

    /// P(next | prev) for symbols already known to be valid
    fn probability(&self, prev: &str, next: &str) -> f64 {
        let outcomes = (self.phonemes.len() + 1) as f64;
        let pair = self
            .pair_counts
            .get(prev)
            .and_then(|row| row.get(next))
            .copied()
            .unwrap_or(0) as f64;
        let total = self.context_totals.get(prev).copied().unwrap_or(0) as f64;

        let denominator = total + self.smoothing * outcomes;
        if denominator == 0.0 {
            // Unseen context with no smoothing: fall back to uniform
            return 1.0 / outcomes;
        }
        (pair + self.smoothing) / denominator
    }
}

impl LanguageModel for BigramModel {
    fn next_probabilities(&self, pronunciation: &[String]) -> Result<HashMap<String, f64>> {
        for symbol in pronunciation {
            self.check_context(symbol)?;
        }
        let prev = pronunciation.last().map(String::as_str).unwrap_or(START);

        Ok(self
            .phonemes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(END))
            .map(|next| (next.to_string(), self.probability(prev, next)))
            .collect())
    }

    fn conditional_probabilities_of_text(&self, pronunciation: &[String]) -> Result<Vec<f64>> {
        for symbol in pronunciation {
            self.check_target(symbol)?;
        }

        let contexts = std::iter::once(START).chain(pronunciation.iter().map(String::as_str));
        let targets  = pronunciation.iter().map(String::as_str).chain(std::iter::once(END));
        Ok(contexts
            .zip(targets)
            .map(|(prev, next)| self.probability(prev, next))
            .collect())
    }

    fn end_symbol(&self) -> &str {
        END
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Pronunciation> {
        ["K AE1 T", "K AE1 B", "B AE1 T"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect()
    }

    fn p(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_unsmoothed_counts() {
        let model = BigramModel::train(&corpus(), 0.0);
        let next  = model.next_probabilities(&p("K AE1")).unwrap();
        // AE1 → T twice, → B once
        assert!((next["T"] - 2.0 / 3.0).abs() < 1e-12);
        assert!((next["B"] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(next["K"], 0.0);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let model = BigramModel::train(&corpus(), 0.5);
        let next  = model.next_probabilities(&p("T")).unwrap();
        // 4 phonemes + <END>
        assert_eq!(next.len(), 5);
        assert!((next.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_pronunciation_conditions_on_start() {
        let model = BigramModel::train(&corpus(), 0.0);
        let next  = model.next_probabilities(&[]).unwrap();
        assert!((next["K"] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(next[END], 0.0);
    }

    #[test]
    fn test_conditional_probabilities_include_end() {
        let model = BigramModel::train(&corpus(), 0.0);
        let probs = model.conditional_probabilities_of_text(&p("K AE1 T")).unwrap();
        assert_eq!(probs.len(), 4);
        // P(T | AE1) = 2/3, P(<END> | T) = 1
        assert!((probs[2] - 2.0 / 3.0).abs() < 1e-12);
        assert!((probs[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_phoneme_is_rejected() {
        let model = BigramModel::train(&corpus(), 1.0);
        assert!(model.next_probabilities(&p("ZH")).is_err());
        assert!(model.conditional_probabilities_of_text(&p("K ZH")).is_err());
    }
}
