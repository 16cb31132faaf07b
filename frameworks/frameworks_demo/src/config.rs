//! Pipeline Configuration
//!
//! Validated settings built from the command line. Validation happens up front
//! so a bad flag is reported before any value is printed.

use api_facades::{
    galois_with_taps, plain, sliced, BoxedSequence, Cursor, GaloisLfsr, SequenceError,
    SequenceTransforms, SlicedSequence, MAX_WIDTH,
};
use thiserror::Error;
use tracing::debug;

use crate::args::{SequenceArgs, SliceArgs};

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("radix {0} is outside 2..=36")]
    InvalidRadix(u8),

    #[error("obscuring bit {bit} leaves nothing of a {width}-bit value")]
    ObscuredTooFar { bit: u64, width: u64 },

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Which generator feeds the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Galois LFSR with the given tap selector
    Galois { taps: usize },
    /// 1, 2, 3, ...
    Plain,
}

/// One generator with its chain of transforms and output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub generator: GeneratorKind,
    pub width: u64,
    pub obscured_bits: Vec<u64>,
    pub stagger: Option<u64>,
    pub skip: usize,
    pub limit: Option<usize>,
    pub radix: u8,
    pub separator: String,
}

fn check_radix(radix: u8) -> Result<(), ConfigError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadix(radix))
    }
}

// Widths below MAX_WIDTH can still be missing from the tap table.
fn check_width(width: u64) -> Result<(), ConfigError> {
    if width == 0 {
        Err(SequenceError::InvalidWidth { width }.into())
    } else if GaloisLfsr::tap_set_count(width) == 0 {
        Err(SequenceError::UnsupportedWidth { width, max: MAX_WIDTH }.into())
    } else {
        Ok(())
    }
}

impl PipelineConfig {
    /// Check every setting against the others
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radix(self.radix)?;
        if let GeneratorKind::Galois { taps } = self.generator {
            check_width(self.width)?;
            let available = GaloisLfsr::tap_set_count(self.width);
            if taps >= available {
                return Err(SequenceError::UnknownTaps {
                    width: self.width,
                    selector: taps,
                    available,
                }
                .into());
            }
        } else if self.width == 0 {
            return Err(SequenceError::InvalidWidth { width: 0 }.into());
        }

        // each obscured bit narrows the domain by one
        let mut width = self.width;
        for &bit in &self.obscured_bits {
            if bit >= width {
                return Err(ConfigError::ObscuredTooFar { bit, width });
            }
            width -= 1;
        }
        Ok(())
    }

    /// Assemble the cursor: generator, obscured bits in order, then stagger
    pub fn build(&self) -> Result<BoxedSequence<'static>, ConfigError> {
        self.validate()?;
        debug!(config = ?self, "building pipeline");

        let mut sequence = match self.generator {
            GeneratorKind::Galois { taps } => galois_with_taps(self.width, taps)?.boxed(),
            GeneratorKind::Plain => plain(self.width)?.boxed(),
        };
        for &bit in &self.obscured_bits {
            sequence = sequence.obscure_bit(bit).boxed();
        }
        if let Some(index) = self.stagger {
            sequence = sequence.stagger(index).boxed();
        }
        sequence.discard(self.skip);
        Ok(sequence)
    }
}

impl TryFrom<&SequenceArgs> for PipelineConfig {
    type Error = ConfigError;

    fn try_from(args: &SequenceArgs) -> Result<Self, Self::Error> {
        let generator = if args.plain {
            GeneratorKind::Plain
        } else {
            GeneratorKind::Galois { taps: args.taps }
        };
        let config = PipelineConfig {
            generator,
            width: args.width,
            obscured_bits: args.obscure.clone(),
            stagger: args.stagger,
            skip: args.skip,
            limit: args.limit,
            radix: args.radix,
            separator: args.separator.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings for listing slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceConfig {
    pub width: u64,
    pub weight: u64,
    pub max_slices: Option<usize>,
    pub radix: u8,
}

impl SliceConfig {
    pub fn build(&self) -> Result<SlicedSequence<GaloisLfsr>, ConfigError> {
        check_radix(self.radix)?;
        check_width(self.width)?;
        Ok(sliced(self.width, self.weight)?)
    }
}

impl TryFrom<&SliceArgs> for SliceConfig {
    type Error = ConfigError;

    fn try_from(args: &SliceArgs) -> Result<Self, Self::Error> {
        check_radix(args.radix)?;
        check_width(args.width)?;
        Ok(SliceConfig {
            width: args.width,
            weight: args.weight,
            max_slices: args.max_slices,
            radix: args.radix,
        })
    }
}
