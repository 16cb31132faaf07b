//! Canned Demonstrations
//!
//! Each demo prints one or more captioned sequences showing a single feature:
//! the raw LFSR, obscuring a bit, slicing, staggering, and a very wide run.

use std::io::Write;

use api_facades::{
    galois, galois_with_taps, plain, sliced, Cursor, Permutation, SequenceTransforms,
};
use tracing::info;

use crate::output::{print_sequence, Layout, RunError};

/// Register width of the wide demo
pub const WIDE_WIDTH: u64 = 1024;

/// Values skipped before printing the wide demo
pub const WIDE_SKIP: usize = 131_071;

/// The demonstrations, in the order `demo` runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    SimpleSequence,
    ObscureBit,
    SlicedSequence,
    StaggeredSequence,
    WideSequence,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::SimpleSequence,
        Demo::ObscureBit,
        Demo::SlicedSequence,
        Demo::StaggeredSequence,
        Demo::WideSequence,
    ];

    pub fn run<W: Write>(self, out: &mut W) -> Result<(), RunError> {
        info!(demo = ?self, "running demo");
        let layout = Layout::default();
        match self {
            Demo::SimpleSequence => {
                print_sequence(
                    out,
                    "A simple 3-bit sequence with default taps",
                    galois(3)?,
                    &layout,
                )?;
                print_sequence(
                    out,
                    "A simple 3-bit sequence with different taps",
                    galois_with_taps(3, 1)?,
                    &layout,
                )?;
            }
            Demo::ObscureBit => {
                print_sequence(out, "The base 4-bit sequence", galois(4)?, &layout)?;
                print_sequence(
                    out,
                    "A 3-bit sequence from the 4-bit sequence with even numbers \
                     discarded and the lowest bit removed",
                    galois(4)?.obscure_bit(0),
                    &layout,
                )?;
            }
            Demo::SlicedSequence => {
                let (n, k) = (7, 6);
                print_sequence(out, "The base 7-bit sequence", galois(n)?, &layout)?;
                for (number, slice) in sliced(n, k)?.enumerate() {
                    print_sequence(out, &format!("Slice {}", number + 1), slice, &layout)?;
                }
            }
            Demo::StaggeredSequence => {
                let index = 867;
                let caption = format!(
                    "Plain sequence staggered by {}",
                    Permutation::from_index(index)
                );
                print_sequence(out, &caption, plain(4)?.stagger(index), &layout)?;
            }
            Demo::WideSequence => {
                let mut sequence = galois(WIDE_WIDTH)?.obscure_bit(0).stagger(10);
                sequence.discard(WIDE_SKIP);
                let layout = Layout {
                    radix: 16,
                    limit: Some(10),
                    separator: "\n".to_string(),
                };
                let caption =
                    format!("{WIDE_WIDTH} bit sequence with bit(0) obscured and staggered");
                print_sequence(out, &caption, sequence, &layout)?;
            }
        }
        Ok(())
    }
}

/// Run every demonstration in order
pub fn run_all<W: Write>(out: &mut W) -> Result<(), RunError> {
    for demo in Demo::ALL {
        demo.run(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(demo: Demo) -> String {
        let mut out = Vec::new();
        demo.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_simple_sequence() {
        let text = output(Demo::SimpleSequence);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1 6 3 7 5 4 2 ");
        assert_eq!(lines[3], "1 5 7 6 3 4 2 ");
    }

    #[test]
    fn test_obscure_bit() {
        let text = output(Demo::ObscureBit);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1 12 6 3 13 10 5 14 7 15 11 9 8 4 2 ");
        assert_eq!(lines[3], "0 1 6 2 3 7 5 4 ");
    }

    #[test]
    fn test_sliced_sequence() {
        let text = output(Demo::SlicedSequence);
        let slices = text.lines().filter(|line| line.starts_with("Slice ")).count();
        assert_eq!(slices, 7);
        assert!(text.contains("Slice 7:"));
    }

    #[test]
    fn test_wide_sequence() {
        let text = output(Demo::WideSequence);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("1024 bit sequence with bit(0) obscured and staggered:")
        );
        let values: Vec<&str> = lines.filter(|line| !line.is_empty()).collect();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|value| value.len() <= 256));
        assert!(values
            .iter()
            .all(|value| value.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn test_staggered_sequence() {
        let text = output(Demo::StaggeredSequence);
        assert_eq!(
            text,
            "Plain sequence staggered by [5, 4, 3, 2, 1, 0]:\n\
             6 5 4 3 2 1 12 11 10 9 8 7 13 14 15 \n"
        );
    }
}
