// ============================================================
// Layer 4 — Generation Origin Classifier
// ============================================================
// After sampling pronunciations from a trained model we want to
// know how much of the output is memorised:
//
//   train — exactly equal to some training pronunciation
//   dev   — not in train, but exactly equal to a dev pronunciation
//   novel — in neither
//
// Train is checked first, so an item present in both reference
// sets counts as train. References are treated as sets;
// duplicates inside them change nothing.

use std::{collections::HashSet, hash::Hash};
use serde::{Deserialize, Serialize};

use crate::domain::error::UtilsError;

/// Raw counts of generated items per origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginCounts {
    pub train: usize,
    pub dev:   usize,
    pub novel: usize,
}

impl OriginCounts {
    pub fn total(&self) -> usize {
        self.train + self.dev + self.novel
    }
}

/// Integer percentages (0–100) of generated items per origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginShares {
    pub train:  u32,
    pub dev:    u32,
    pub novel:  u32,
    pub counts: OriginCounts,
}

impl OriginShares {
    /// (train, dev, novel) percentages
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.train, self.dev, self.novel)
    }
}

/// Classify every item of `generated` against the train and dev sets.
pub fn classify_origins<T: Eq + Hash>(generated: &[T], train: &[T], dev: &[T]) -> OriginCounts {
    let train: HashSet<&T> = train.iter().collect();
    let dev:   HashSet<&T> = dev.iter().collect();

    generated.iter().fold(OriginCounts::default(), |mut counts, item| {
        if train.contains(item) {
            counts.train += 1;
        } else if dev.contains(item) {
            counts.dev += 1;
        } else {
            counts.novel += 1;
        }
        counts
    })
}

/// Percentages of `generated` found in `train`, in `dev`, and in neither.
///
/// Each percentage is rounded to the nearest integer, so the three
/// may sum to 99 or 101.
///
/// # Errors
/// [`UtilsError::EmptyGenerated`] when `generated` is empty.
pub fn count_origins<T: Eq + Hash>(
    generated: &[T],
    train:     &[T],
    dev:       &[T],
) -> Result<OriginShares, UtilsError> {
    if generated.is_empty() {
        return Err(UtilsError::EmptyGenerated);
    }

    let counts = classify_origins(generated, train, dev);
    let total  = counts.total() as f64;
    let pct    = |n: usize| (100.0 * n as f64 / total).round() as u32;

    tracing::debug!(
        "Origins of {} generated items: {} train, {} dev, {} novel",
        counts.total(),
        counts.train,
        counts.dev,
        counts.novel,
    );

    Ok(OriginShares {
        train: pct(counts.train),
        dev:   pct(counts.dev),
        novel: pct(counts.novel),
        counts,
    })
}
