//! Frameworks Layer: Demonstration Driver
//!
//! Everything behind the `obscure-seq` binary: argument parsing, validated
//! configuration, the canned demonstrations and the printing they share.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: clap definitions for `demo`, `sequence` and `slices`
//! - **[`config`](config/index.html)**: [`PipelineConfig`] and [`SliceConfig`], checked
//!   before anything is generated
//! - **[`demos`](demos/index.html)**: the five demonstrations
//! - **[`output`](output/index.html)**: captioned value printing

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Obscure Sequence Authors 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod args;
pub mod config;
pub mod demos;
pub mod output;

use std::io::Write;

use tracing::debug;

pub use args::{Command, DemoArgs, SequenceArgs, SliceArgs};
pub use config::{ConfigError, GeneratorKind, PipelineConfig, SliceConfig};
pub use demos::{run_all, Demo};
pub use output::{print_sequence, Layout, RunError};

/// Print the sequence described by `config`
pub fn run_sequence<W: Write>(config: &PipelineConfig, out: &mut W) -> Result<usize, RunError> {
    let sequence = config.build()?;
    let layout = Layout {
        radix: config.radix,
        limit: config.limit,
        separator: config.separator.clone(),
    };
    let caption = format!("{}-bit sequence", config.width);
    print_sequence(out, &caption, sequence, &layout)
}

/// Print each slice of `config.width` bits cut at weight `config.weight`
///
/// Returns the number of slices printed.
pub fn run_slices<W: Write>(config: &SliceConfig, out: &mut W) -> Result<usize, RunError> {
    let slices = config.build()?;
    debug!(
        width = config.width,
        weight = config.weight,
        boundaries = %slices.boundary_count(),
        "listing slices"
    );
    let layout = Layout {
        radix: config.radix,
        ..Layout::default()
    };
    let mut printed = 0;
    for slice in slices.take(config.max_slices.unwrap_or(usize::MAX)) {
        printed += 1;
        print_sequence(out, &format!("Slice {printed}"), slice, &layout)?;
    }
    Ok(printed)
}

/// Dispatch a parsed command line
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), RunError> {
    match command {
        Command::Demo => run_all(out),
        Command::Sequence(args) => {
            run_sequence(&PipelineConfig::try_from(args)?, out)?;
            Ok(())
        }
        Command::Slices(args) => {
            run_slices(&SliceConfig::try_from(args)?, out)?;
            Ok(())
        }
    }
}
