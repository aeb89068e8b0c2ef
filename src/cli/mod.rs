// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand.
// Work is delegated to Layer 2 (application) or straight to
// the library helpers; this layer only prints results.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use burn::backend::{ndarray::NdArrayDevice, NdArray, Wgpu};
use clap::Parser;
use std::io;

use commands::{
    CellArgs, Commands, DeviceArgs, NextPhonemeArgs, OriginsArgs, OutputFormat, SplitArgs,
    TrendArgs, WordProbabilityArgs,
};
use crate::application::{
    inspect_use_case::InspectUseCase, origins_use_case::OriginsUseCase,
    split_use_case::SplitUseCase,
};
use crate::domain::{pronunciation::Pronunciation, traits::ChartRenderer};
use crate::infra::{
    metrics::{has_decreased, truncate},
    renderer::{JsonRenderer, TextRenderer},
};
use crate::ml::{
    cell::{get_rnn_model_by_name, RnnKind},
    device::{get_device_by_name, ComputeDevice, SystemProbe},
};

#[derive(Parser, Debug)]
#[command(
    name = "sonorant",
    version,
    about = "Analysis helpers for phoneme language models."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)           => run_split(args),
            Commands::Origins(args)         => run_origins(args),
            Commands::NextPhoneme(args)     => run_next_phoneme(args),
            Commands::WordProbability(args) => run_word_probability(args),
            Commands::Trend(args)           => run_trend(args),
            Commands::Device(args)          => run_device(args),
            Commands::Cell(args)            => run_cell(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    let summary = SplitUseCase::new(args.into()).execute()?;
    println!("train: {}\ndev:   {}\ntest:  {}", summary.train, summary.dev, summary.test);
    Ok(())
}

fn run_origins(args: OriginsArgs) -> Result<()> {
    let shares = OriginsUseCase::new(args.generated, args.train, args.dev).execute()?;
    println!(
        "train: {}%\ndev:   {}%\nnovel: {}%",
        shares.train, shares.dev, shares.novel
    );
    Ok(())
}

/// Stdout renderer chosen by --format
fn stdout_renderer(format: OutputFormat) -> Box<dyn ChartRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    }
}

fn run_next_phoneme(args: NextPhonemeArgs) -> Result<()> {
    let use_case = InspectUseCase::new(args.model.to_config(args.min_probability))?;
    let pronunciation: Pronunciation = args.pronunciation.parse()?;
    let mut renderer = stdout_renderer(args.model.format);

    // An empty distribution is already reported through tracing
    use_case.next_phoneme(&pronunciation, &mut renderer)?;
    Ok(())
}

fn run_word_probability(args: WordProbabilityArgs) -> Result<()> {
    let use_case = InspectUseCase::new(args.model.to_config(0.0))?;
    let pronunciation: Pronunciation = args.pronunciation.parse()?;
    let mut renderer = stdout_renderer(args.model.format);
    use_case.word_probability(&pronunciation, &mut renderer)
}

fn run_trend(args: TrendArgs) -> Result<()> {
    if has_decreased(&args.scores, args.window) {
        println!("improving: best of the last {} epochs matches or beats everything before", args.window);
    } else {
        println!("stalled: no improvement in the last {} epochs", args.window);
    }
    Ok(())
}

fn run_device(args: DeviceArgs) -> Result<()> {
    let device = get_device_by_name(args.name.as_deref(), &SystemProbe)?;
    println!("{device} ({:?})", device.to_wgpu());
    Ok(())
}

fn run_cell(args: CellArgs) -> Result<()> {
    let kind   = get_rnn_model_by_name(&args.kind)?;
    let device = get_device_by_name(args.device.as_deref(), &SystemProbe)?;
    tracing::info!("Building {} layer on {}", kind, device);

    let params = match device {
        ComputeDevice::Cpu  => count_params::<NdArray>(kind, &args, &NdArrayDevice::Cpu),
        ComputeDevice::Cuda => count_params::<Wgpu>(kind, &args, &device.to_wgpu()),
    };
    let millions = truncate(params as f64 / 1e6, 3);
    println!("{kind} {}→{} on {device}: {params} parameters (~{millions}M)", args.d_input, args.d_hidden);
    Ok(())
}

fn count_params<B: burn::prelude::Backend>(kind: RnnKind, args: &CellArgs, device: &B::Device) -> usize {
    kind.init::<B>(args.d_input, args.d_hidden, device).num_params()
}
