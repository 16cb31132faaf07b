//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. Arguments are turned into a
//! validated [`PipelineConfig`](crate::config::PipelineConfig) or
//! [`SliceConfig`](crate::config::SliceConfig) before anything runs.

use clap::{Args, Parser, Subcommand};

/// obscure-seq command-line arguments
#[derive(Parser, Debug)]
#[command(name = "obscure-seq")]
#[command(about = "Deterministic obscure bit-pattern sequences")]
pub struct DemoArgs {
    /// More log output on stderr (repeat for more); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// What to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the canned demonstrations
    Demo,
    /// Print one generated, optionally transformed, sequence
    Sequence(SequenceArgs),
    /// Print the slices of a sequence cut at fixed-weight values
    Slices(SliceArgs),
}

/// Arguments for `sequence`
#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Bit width of the generator
    #[arg(short, long, default_value_t = 8)]
    pub width: u64,

    /// Count 1, 2, 3, ... instead of using the LFSR
    #[arg(long)]
    pub plain: bool,

    /// Alternate LFSR tap set (0 is the default)
    #[arg(long, default_value_t = 0)]
    pub taps: usize,

    /// Obscure this bit (repeatable, applied in order)
    #[arg(short, long = "obscure")]
    pub obscure: Vec<u64>,

    /// Stagger with this permutation index
    #[arg(short, long)]
    pub stagger: Option<u64>,

    /// Discard this many values first
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Print at most this many values
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output radix (2 to 36)
    #[arg(short, long, default_value_t = 10)]
    pub radix: u8,

    /// Separator printed after each value
    #[arg(long, default_value = " ")]
    pub separator: String,
}

/// Arguments for `slices`
#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Bit width of the sliced sequence
    #[arg(short = 'n', long, default_value_t = 7)]
    pub width: u64,

    /// Number of bits set in each slice boundary
    #[arg(short = 'k', long, default_value_t = 6)]
    pub weight: u64,

    /// Print at most this many slices
    #[arg(long)]
    pub max_slices: Option<usize>,

    /// Output radix (2 to 36)
    #[arg(short, long, default_value_t = 2)]
    pub radix: u8,
}
