// crates/fllt-core/src/emit.rs
//
// Second pass: replay the buffered bytes and pad each line.
//
// Aligned mode, per line:
//   start? + content + fill * ((target - width) + number) + end? + '\n'
// Single-line mode (input has no newline at all):
//   start? + content + fill * number + end? + '\n'
//
// `target` is the widest line seen by ingest, so `target - width` never
// underflows for any line.

use std::io::Write;

use tracing::debug;

use crate::config::{FillBytes, FillSpec};
use crate::error::Result;
use crate::ingest::Ingest;
use crate::width::{line_width, NEWLINE};

/// Fill copies written per `write_all` call.
const FILL_RUN: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmitMode {
    /// No input bytes; nothing is written.
    Empty,
    /// Exactly one line and no newline anywhere in the input.
    SingleLine,
    /// One or more newline-terminated lines, possibly followed by an
    /// unterminated tail.
    Aligned,
}

impl EmitMode {
    pub fn select(ingest: &Ingest) -> Self {
        if ingest.buffer.is_empty() {
            EmitMode::Empty
        } else if ingest.newlines == 0 {
            EmitMode::SingleLine
        } else {
            EmitMode::Aligned
        }
    }
}

/// Width every line of `ingest` is padded up to before the extra count.
///
/// An unterminated tail after other lines joins the alignment so the
/// padding count stays non-negative.
pub fn target_width(ingest: &Ingest) -> usize {
    match EmitMode::select(ingest) {
        EmitMode::Empty => 0,
        EmitMode::SingleLine => ingest.trailing_width,
        EmitMode::Aligned => ingest.max_width.max(ingest.trailing_width),
    }
}

/// Write the padded form of `ingest` to `sink`.
///
/// Only sink I/O errors are returned; nothing is retried.
pub fn emit<W: Write>(ingest: &Ingest, spec: &FillSpec, sink: &mut W) -> Result<()> {
    let mode = EmitMode::select(ingest);
    let target = target_width(ingest);
    debug!(?mode, target, number = spec.number, "emit");

    let line = LineWriter::new(spec);
    match mode {
        EmitMode::Empty => {}
        EmitMode::SingleLine => line.write(sink, ingest.bytes(), spec.number)?,
        EmitMode::Aligned => {
            let mut rest = ingest.bytes();
            while !rest.is_empty() {
                let (content, tail) = match rest.iter().position(|&b| b == NEWLINE) {
                    Some(i) => (&rest[..i], &rest[i + 1..]),
                    None => (rest, &rest[rest.len()..]),
                };
                let width = line_width(content);
                debug_assert!(width <= target, "line wider than target width");
                let pad = (target - width) as u64 + spec.number;
                line.write(sink, content, pad)?;
                rest = tail;
            }
        }
    }
    Ok(())
}

/// Emit into a fresh `Vec<u8>`.
pub fn emit_to_vec(ingest: &Ingest, spec: &FillSpec) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(ingest.buffer.len());
    emit(ingest, spec, &mut out)?;
    Ok(out)
}

struct LineWriter<'a> {
    start: Option<&'a [u8]>,
    end: Option<&'a [u8]>,
    fill: FillBytes,
    run: Vec<u8>,
}

impl<'a> LineWriter<'a> {
    fn new(spec: &'a FillSpec) -> Self {
        let fill = spec.fill_bytes();
        Self {
            start: spec.start.as_deref(),
            end: spec.end.as_deref(),
            fill,
            run: fill.as_bytes().repeat(FILL_RUN),
        }
    }

    fn write<W: Write>(&self, sink: &mut W, content: &[u8], pad: u64) -> Result<()> {
        if let Some(start) = self.start {
            sink.write_all(start)?;
        }
        sink.write_all(content)?;
        self.write_fill(sink, pad)?;
        if let Some(end) = self.end {
            sink.write_all(end)?;
        }
        sink.write_all(&[NEWLINE])?;
        Ok(())
    }

    fn write_fill<W: Write>(&self, sink: &mut W, mut count: u64) -> Result<()> {
        let unit = self.fill.as_bytes().len();
        while count > 0 {
            let n = count.min(FILL_RUN as u64) as usize;
            sink.write_all(&self.run[..n * unit])?;
            count -= n as u64;
        }
        Ok(())
    }
}
