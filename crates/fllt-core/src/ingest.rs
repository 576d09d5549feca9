// crates/fllt-core/src/ingest.rs
//
// First pass: buffer the whole input and measure the widest line.
//
// Width is tracked in the same pass as buffering. A line completes at `\n`;
// bytes after the last newline form the trailing (unterminated) line, whose
// width is reported separately and not folded into `max_width`.

use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

use crate::config::BUFFER_CHUNK;
use crate::error::{FlltError, Result};
use crate::width::{unit_width, NEWLINE};

const READ_CHUNK: usize = 8 * 1024;

/// Owned byte buffer holding the entire input exactly as read.
///
/// Capacity grows in fixed `chunk` increments, never multiplicatively.
/// Growth failure is reported as [`FlltError::Alloc`].
#[derive(Debug)]
pub struct InputBuffer {
    bytes: Vec<u8>,
    chunk: usize,
}

impl InputBuffer {
    pub fn new() -> Result<Self> {
        Self::with_chunk(BUFFER_CHUNK)
    }

    pub fn with_chunk(chunk: usize) -> Result<Self> {
        let chunk = chunk.max(1);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(chunk)
            .map_err(|_| FlltError::Alloc { requested: chunk })?;
        Ok(Self { bytes, chunk })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append `data`, growing by whole chunks when it would not fit.
    pub fn extend(&mut self, data: &[u8]) -> Result<()> {
        self.reserve(data.len())?;
        self.bytes.extend_from_slice(data);
        Ok(())
    }

    /// Make room for `additional` more bytes, growing by whole chunks.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .bytes
            .len()
            .checked_add(additional)
            .ok_or(FlltError::Alloc { requested: usize::MAX })?;

        let cap = self.bytes.capacity();
        if needed > cap {
            let steps = (needed - cap).div_ceil(self.chunk);
            let target = steps
                .checked_mul(self.chunk)
                .and_then(|grow| cap.checked_add(grow))
                .ok_or(FlltError::Alloc { requested: usize::MAX })?;
            self.bytes
                .try_reserve_exact(target - self.bytes.len())
                .map_err(|_| FlltError::Alloc { requested: target })?;
            trace!(from = cap, to = self.bytes.capacity(), "input buffer grown");
        }
        Ok(())
    }
}

/// Result of the first pass.
#[derive(Debug)]
pub struct Ingest {
    pub buffer: InputBuffer,
    /// Widest newline-terminated line, in code points.
    pub max_width: usize,
    /// Input ended with bytes after the last newline.
    pub trailing_unterminated: bool,
    /// Width of that trailing line (0 when terminated).
    pub trailing_width: usize,
    /// Number of newline bytes seen.
    pub newlines: usize,
}

impl Ingest {
    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }
}

#[derive(Default)]
struct LineMeter {
    current: usize,
    max: usize,
    newlines: usize,
}

impl LineMeter {
    fn feed(&mut self, chunk: &[u8]) {
        for &b in chunk {
            if b == NEWLINE {
                self.max = self.max.max(self.current);
                self.current = 0;
                self.newlines += 1;
            } else {
                self.current += unit_width(b);
            }
        }
    }
}

/// Read `source` to end-of-stream into a fresh [`InputBuffer`].
pub fn ingest<R: Read>(source: R) -> Result<Ingest> {
    ingest_into(source, InputBuffer::new()?)
}

/// Like [`ingest`], but fills a caller-supplied buffer (e.g. one with a
/// custom growth chunk).
pub fn ingest_into<R: Read>(mut source: R, mut buffer: InputBuffer) -> Result<Ingest> {
    let mut meter = LineMeter::default();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        buffer.extend(&chunk[..n])?;
        meter.feed(&chunk[..n]);
    }

    let trailing_unterminated = buffer.as_bytes().last().is_some_and(|&b| b != NEWLINE);

    debug!(
        bytes = buffer.len(),
        newlines = meter.newlines,
        max_width = meter.max,
        trailing_unterminated,
        trailing_width = meter.current,
        "ingest complete"
    );

    Ok(Ingest {
        buffer,
        max_width: meter.max,
        trailing_unterminated,
        trailing_width: meter.current,
        newlines: meter.newlines,
    })
}

/// Convenience for in-memory input.
pub fn ingest_bytes(input: &[u8]) -> Result<Ingest> {
    ingest(input)
}
