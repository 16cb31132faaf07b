//! Sequence Printing
//!
//! Writes a caption line followed by the values of a cursor, each rendered in
//! the requested radix and followed by a separator.

use std::io::{self, Write};

use api_facades::{format_radix, Cursor, SequenceError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from running a command
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// How values are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub radix: u8,
    pub limit: Option<usize>,
    pub separator: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            radix: 10,
            limit: None,
            separator: " ".to_string(),
        }
    }
}

/// Print `caption`, then every value of `sequence` up to the layout's limit
///
/// Returns the number of values written.
pub fn print_sequence<W, C>(
    out: &mut W,
    caption: &str,
    mut sequence: C,
    layout: &Layout,
) -> Result<usize, RunError>
where
    W: Write,
    C: Cursor,
{
    writeln!(out, "{caption}:")?;
    let mut written = 0;
    while layout.limit.map_or(true, |limit| written < limit) && sequence.has_next() {
        let value = sequence.next_value()?;
        let text = format_radix(&value, layout.radix)
            .ok_or(ConfigError::InvalidRadix(layout.radix))?;
        write!(out, "{text}{}", layout.separator)?;
        written += 1;
    }
    writeln!(out)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_facades::{galois, plain};

    fn render<C: Cursor>(sequence: C, layout: &Layout) -> String {
        let mut out = Vec::new();
        print_sequence(&mut out, "Values", sequence, layout).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_layout() {
        let text = render(galois(3).unwrap(), &Layout::default());
        assert_eq!(text, "Values:\n1 6 3 7 5 4 2 \n");
    }

    #[test]
    fn test_limit_and_radix() {
        let layout = Layout {
            radix: 16,
            limit: Some(3),
            separator: "\n".to_string(),
        };
        let text = render(plain(4).unwrap().discard(9), &layout);
        assert_eq!(text, "Values:\na\nb\nc\n\n");
    }

    #[test]
    fn test_bad_radix() {
        let layout = Layout { radix: 40, ..Layout::default() };
        let mut out = Vec::new();
        let result = print_sequence(&mut out, "Values", plain(2).unwrap(), &layout);
        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::InvalidRadix(40)))
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let text = render(plain(2).unwrap().discard(10), &Layout::default());
        assert_eq!(text, "Values:\n\n");
    }
}
