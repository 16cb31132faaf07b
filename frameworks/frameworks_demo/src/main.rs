//! obscure-seq Binary Entry Point
//!
//! Parses the command line, installs logging and runs the chosen command,
//! writing values to stdout and diagnostics to stderr.

use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use frameworks_demo::{run, DemoArgs};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = DemoArgs::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(&args.command, &mut out);
    let flushed = out.flush();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    if let Err(e) = flushed {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
