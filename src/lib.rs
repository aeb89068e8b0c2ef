//! Analysis helpers for phoneme language-model experiments.
//!
//! - [`data`]: corpus loading, seeded train/dev/test splits, origin statistics
//! - [`analysis`]: introspection charts built from a [`domain::traits::LanguageModel`]
//! - [`ml`]: recurrent cell and compute device selection, a bigram reference model
//! - [`infra`]: score-trend and truncation helpers, chart renderers
//! - [`cli`] / [`application`]: the `sonorant` command line

pub mod analysis;
pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
