// ============================================================
// Layer 4 — Pronunciation Loader
// ============================================================
// Reads phoneme corpora from plain text files:
//
//   # comment lines and blank lines are skipped
//   K AE1 T
//   D AO1 G
//
// Each remaining line is one pronunciation; phonemes are
// separated by any whitespace.
//
// Writing goes the other way, one pronunciation per line,
// so a split corpus can be loaded back with the same loader.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::pronunciation::Pronunciation;
use crate::domain::traits::PronunciationSource;

/// Loads pronunciations from a single text file.
/// Implements the PronunciationSource trait from Layer 3.
pub struct PronunciationLoader {
    path: PathBuf,
}

impl PronunciationLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PronunciationSource for PronunciationLoader {
    fn load_all(&self) -> Result<Vec<Pronunciation>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let pronunciations = parse_corpus(&text);
        tracing::debug!(
            "Loaded {} pronunciations from '{}'",
            pronunciations.len(),
            self.path.display()
        );
        Ok(pronunciations)
    }
}

/// Parse corpus text, skipping blank and `#` comment lines.
pub fn parse_corpus(text: &str) -> Vec<Pronunciation> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| Pronunciation::new(line.split_whitespace()))
        .collect()
}

/// Write pronunciations one per line, creating parent directories.
pub fn write_pronunciations(path: &Path, pronunciations: &[Pronunciation]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    for p in pronunciations {
        writeln!(out, "{p}")?;
    }
    out.flush()?;

    tracing::debug!("Wrote {} pronunciations to '{}'", pronunciations.len(), path.display());
    Ok(())
}
