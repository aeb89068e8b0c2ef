// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands:
//   split            — corpus → train / dev / test files
//   origins          — memorisation report for generated output
//   next-phoneme     — chart of the next-phoneme distribution
//   word-probability — chart of P(phoneme_i | prefix) for a word
//   trend            — has a score history stopped improving?
//   device           — which compute device would be used
//   cell             — build a recurrent layer and describe it
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::{inspect_use_case::InspectConfig, split_use_case::SplitConfig};
use crate::analysis::plots::DEFAULT_MIN_PROBABILITY;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a pronunciation corpus into train/dev/test files
    Split(SplitArgs),

    /// Report what share of generated pronunciations come from train, dev, or neither
    Origins(OriginsArgs),

    /// Chart the distribution over the next phoneme
    NextPhoneme(NextPhonemeArgs),

    /// Chart the conditional probability of each phoneme in a pronunciation
    WordProbability(WordProbabilityArgs),

    /// Check whether the last scores improved on the earlier ones
    Trend(TrendArgs),

    /// Show the compute device that would be selected
    Device(DeviceArgs),

    /// Build a recurrent layer and print its size
    Cell(CellArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Corpus file, one pronunciation per line
    #[arg(long)]
    pub input: PathBuf,

    /// Directory to write train.txt, dev.txt and test.txt into
    #[arg(long, default_value = "data/split")]
    pub output_dir: PathBuf,

    /// Share of rows for the dev set
    #[arg(long, default_value_t = 0.1)]
    pub dev: f64,

    /// Share of rows for the test set
    #[arg(long, default_value_t = 0.1)]
    pub test: f64,

    /// Seed for the shuffle
    #[arg(long, default_value_t = 47)]
    pub seed: u64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input:           a.input,
            output_dir:      a.output_dir,
            dev_proportion:  a.dev,
            test_proportion: a.test,
            seed:            a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct OriginsArgs {
    /// Generated pronunciations
    #[arg(long)]
    pub generated: PathBuf,

    /// Training corpus
    #[arg(long)]
    pub train: PathBuf,

    /// Dev corpus
    #[arg(long)]
    pub dev: PathBuf,
}

/// How charts are written to stdout
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by the chart commands
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Corpus to fit the bigram model on
    #[arg(long)]
    pub corpus: PathBuf,

    /// Add-k smoothing for the bigram model
    #[arg(long, default_value_t = 0.1)]
    pub smoothing: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct NextPhonemeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Pronunciation so far, e.g. "K AE1" (may be empty)
    #[arg(long, default_value = "")]
    pub pronunciation: String,

    /// Hide phonemes below this probability
    #[arg(long, default_value_t = DEFAULT_MIN_PROBABILITY)]
    pub min_probability: f64,
}

#[derive(Args, Debug)]
pub struct WordProbabilityArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Whole pronunciation, e.g. "K AE1 T"
    #[arg(long)]
    pub pronunciation: String,
}

impl ModelArgs {
    pub fn to_config(&self, min_probability: f64) -> InspectConfig {
        InspectConfig {
            corpus:    self.corpus.clone(),
            smoothing: self.smoothing,
            min_probability,
        }
    }
}

#[derive(Args, Debug)]
pub struct TrendArgs {
    /// Scores in epoch order, comma separated (lower is better)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub scores: Vec<f64>,

    /// How many trailing epochs count as "recent"
    #[arg(long, default_value_t = 3)]
    pub window: usize,
}

#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// "cpu" or "cuda"; omit to pick automatically
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct CellArgs {
    /// Cell kind: rnn, lstm or gru
    #[arg(long)]
    pub kind: String,

    #[arg(long, default_value_t = 32)]
    pub d_input: usize,

    #[arg(long, default_value_t = 64)]
    pub d_hidden: usize,

    /// "cpu" or "cuda"; omit to pick automatically
    #[arg(long)]
    pub device: Option<String>,
}
