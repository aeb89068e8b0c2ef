// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Splits a pronunciation corpus into train / dev / test files:
//
//   Step 1: Load the corpus           (Layer 4 - data)
//   Step 2: Seeded three-way split    (Layer 4 - data)
//   Step 3: Write train/dev/test.txt  (Layer 4 - data)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::{write_pronunciations, PronunciationLoader},
    splitter::split_data,
};
use crate::domain::traits::PronunciationSource;

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub input:           PathBuf,
    pub output_dir:      PathBuf,
    pub dev_proportion:  f64,
    pub test_proportion: f64,
    pub seed:            u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input:           PathBuf::from("data/pronunciations.txt"),
            output_dir:      PathBuf::from("data/split"),
            dev_proportion:  0.1,
            test_proportion: 0.1,
            seed:            47,
        }
    }
}

/// Row counts of the files written by a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub train: usize,
    pub dev:   usize,
    pub test:  usize,
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitSummary> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        tracing::info!("Loading pronunciations from '{}'", cfg.input.display());
        let rows = PronunciationLoader::new(&cfg.input).load_all()?;

        // ── Step 2: Split ─────────────────────────────────────────────────────
        let parts = split_data(rows, cfg.dev_proportion, cfg.test_proportion, cfg.seed)?;

        // ── Step 3: Write ─────────────────────────────────────────────────────
        write_pronunciations(&cfg.output_dir.join("train.txt"), &parts.train)?;
        write_pronunciations(&cfg.output_dir.join("dev.txt"),   &parts.dev)?;
        write_pronunciations(&cfg.output_dir.join("test.txt"),  &parts.test)?;

        let summary = SplitSummary {
            train: parts.train.len(),
            dev:   parts.dev.len(),
            test:  parts.test.len(),
        };
        tracing::info!(
            "Wrote {} train, {} dev, {} test to '{}'",
            summary.train,
            summary.dev,
            summary.test,
            cfg.output_dir.display()
        );
        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pronunciation::Pronunciation;

    #[test]
    fn test_split_writes_three_files() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("corpus.txt");
        let rows: Vec<Pronunciation> = (0..20)
            .map(|i| Pronunciation::new(["P".to_string(), format!("V{i}")]))
            .collect();
        write_pronunciations(&input, &rows).unwrap();

        let config = SplitConfig {
            input,
            output_dir: dir.path().join("out"),
            dev_proportion: 0.25,
            test_proportion: 0.25,
            ..SplitConfig::default()
        };
        let summary = SplitUseCase::new(config).execute().unwrap();
        assert_eq!(summary, SplitSummary { train: 10, dev: 5, test: 5 });

        let dev = PronunciationLoader::new(dir.path().join("out").join("dev.txt"))
            .load_all()
            .unwrap();
        assert_eq!(dev.len(), 5);
    }

    #[test]
    fn test_bad_proportions_fail_before_writing() {
        let dir   = tempfile::tempdir().unwrap();
        let input = dir.path().join("corpus.txt");
        write_pronunciations(&input, &[Pronunciation::new(["A"])]).unwrap();

        let config = SplitConfig {
            input,
            output_dir: dir.path().join("out"),
            dev_proportion: 0.6,
            test_proportion: 0.6,
            ..SplitConfig::default()
        };
        assert!(SplitUseCase::new(config).execute().is_err());
        assert!(!dir.path().join("out").exists());
    }
}
