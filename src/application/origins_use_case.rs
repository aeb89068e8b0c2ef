// ============================================================
// Layer 2 — OriginsUseCase
// ============================================================
// Loads generated, train and dev corpora and reports how much
// of the generated output was copied from each.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{loader::PronunciationLoader, origins::{count_origins, OriginShares}};
use crate::domain::traits::PronunciationSource;

pub struct OriginsUseCase {
    generated: PathBuf,
    train:     PathBuf,
    dev:       PathBuf,
}

impl OriginsUseCase {
    pub fn new(generated: impl Into<PathBuf>, train: impl Into<PathBuf>, dev: impl Into<PathBuf>) -> Self {
        Self {
            generated: generated.into(),
            train:     train.into(),
            dev:       dev.into(),
        }
    }

    pub fn execute(&self) -> Result<OriginShares> {
        let generated = PronunciationLoader::new(&self.generated).load_all()?;
        let train     = PronunciationLoader::new(&self.train).load_all()?;
        let dev       = PronunciationLoader::new(&self.dev).load_all()?;

        tracing::info!(
            "Classifying {} generated pronunciations against {} train / {} dev",
            generated.len(),
            train.len(),
            dev.len()
        );

        count_origins(&generated, &train, &dev)
            .with_context(|| format!("No pronunciations in '{}'", self.generated.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_origins_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(name);
        fs::write(path("gen.txt"),   "W AH1 N\nT UW1\nTH R IY1\nF AO1 R\n").unwrap();
        fs::write(path("train.txt"), "W AH1 N\nT UW1\n").unwrap();
        fs::write(path("dev.txt"),   "TH R IY1\n").unwrap();

        let shares = OriginsUseCase::new(path("gen.txt"), path("train.txt"), path("dev.txt"))
            .execute()
            .unwrap();
        assert_eq!(shares.as_tuple(), (50, 25, 25));
    }

    #[test]
    fn test_empty_generated_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(name);
        fs::write(path("gen.txt"),   "# nothing here\n").unwrap();
        fs::write(path("train.txt"), "A\n").unwrap();
        fs::write(path("dev.txt"),   "").unwrap();

        let result = OriginsUseCase::new(path("gen.txt"), path("train.txt"), path("dev.txt")).execute();
        assert!(result.is_err());
    }
}
