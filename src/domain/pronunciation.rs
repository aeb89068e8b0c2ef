// ============================================================
// Layer 3 — Pronunciation Domain Type
// ============================================================
// A pronunciation is the ordered phoneme sequence for one word,
// e.g. /K AE1 T/ for "cat". It may be empty.
//
// Two pronunciations are equal only if they match element by
// element, which is exactly what the origin classifier needs,
// so Eq and Hash are derived rather than hand-written.
//
// Text form: phonemes separated by whitespace ("K AE1 T").
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use std::{convert::Infallible, fmt, ops::Deref, str::FromStr};
use serde::{Deserialize, Serialize};

/// An ordered sequence of phoneme tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pronunciation(Vec<String>);

impl Pronunciation {
    /// Build a pronunciation from anything that yields phoneme strings.
    ///
    /// Example:
    ///   let cat = Pronunciation::new(["K", "AE1", "T"]);
    pub fn new<I, S>(phonemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(phonemes.into_iter().map(Into::into).collect())
    }

    pub fn phonemes(&self) -> &[String] {
        &self.0
    }

    pub fn into_phonemes(self) -> Vec<String> {
        self.0
    }
}

/// Lets a Pronunciation be used anywhere a `&[String]` is expected
impl Deref for Pronunciation {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Pronunciation {
    fn from(phonemes: Vec<String>) -> Self {
        Self(phonemes)
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl FromStr for Pronunciation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split_whitespace()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let p: Pronunciation = "K  AE1\tT".parse().unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.to_string(), "K AE1 T");
    }

    #[test]
    fn test_empty_pronunciation() {
        let p: Pronunciation = "   ".parse().unwrap();
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "");
    }

    #[test]
    fn test_elementwise_equality() {
        assert_eq!(Pronunciation::new(["K", "AE1"]), "K AE1".parse::<Pronunciation>().unwrap());
        assert_ne!(Pronunciation::new(["K", "AE1"]), Pronunciation::new(["K", "AE0"]));
    }
}
