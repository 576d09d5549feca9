// crates/fllt-core/src/config.rs

use crate::error::{FlltError, Result};

/// Fill character used when none is configured.
pub const DEFAULT_FILL: char = ' ';

/// Upper bound on the extra fill count, guards against runaway output.
pub const LIMIT_FILL: u64 = 100_000_000;

/// Fixed growth increment (and initial capacity) of the input buffer.
pub const BUFFER_CHUNK: usize = 64 * 1024;

/// Padding configuration. Immutable for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillSpec {
    /// Repeated as a whole code point, never byte-by-byte.
    pub fill: char,
    /// Extra fill repetitions appended after width alignment.
    pub number: u64,
    /// Emitted before every line's content. Opaque bytes, need not be UTF-8.
    pub start: Option<Vec<u8>>,
    /// Emitted before every line's trailing newline. Opaque bytes.
    pub end: Option<Vec<u8>>,
}

impl Default for FillSpec {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            number: 0,
            start: None,
            end: None,
        }
    }
}

impl FillSpec {
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }

    pub fn with_start(mut self, start: impl Into<Vec<u8>>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_end(mut self, end: impl Into<Vec<u8>>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// UTF-8 encoding of the fill character.
    pub fn fill_bytes(&self) -> FillBytes {
        let mut buf = [0u8; 4];
        let len = self.fill.encode_utf8(&mut buf).len();
        FillBytes { buf, len }
    }
}

/// Encoded fill character, kept inline so emission never allocates for it.
#[derive(Clone, Copy, Debug)]
pub struct FillBytes {
    buf: [u8; 4],
    len: usize,
}

impl FillBytes {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Parse a fill argument: exactly one code point.
pub fn parse_fill(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FlltError::Validation(format!(
            "argument to 'fill' should be a single character, got {s:?}"
        ))),
    }
}

/// Parse an extra fill count: ASCII digits only, at most [`LIMIT_FILL`].
pub fn parse_number(s: &str) -> Result<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FlltError::Validation(format!(
            "argument to 'number' should be a non-negative integer, got {s:?}"
        )));
    }
    // All digits, so the only parse failure left is overflow.
    let n = s.parse::<u64>().unwrap_or(u64::MAX);
    if n > LIMIT_FILL {
        return Err(FlltError::Validation(format!(
            "argument to 'number' must not exceed {LIMIT_FILL}, got {s}"
        )));
    }
    Ok(n)
}
