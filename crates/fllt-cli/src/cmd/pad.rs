use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use fllt_core::config::{parse_fill, parse_number, DEFAULT_FILL};
use fllt_core::validate::validate_fill_spec;
use fllt_core::{emit, ingest, FillSpec};
use tracing::info;

use crate::io::source::open_source;

#[derive(Args, Debug)]
pub struct PadArgs {
    /// Use single CHARACTER for filling
    #[arg(short, long, value_name = "CHARACTER", default_value_t = DEFAULT_FILL, value_parser = fill_arg)]
    pub fill: char,

    /// Append INTEGER extra fill characters past the longest line
    #[arg(short, long, value_name = "INTEGER", default_value_t = 0, value_parser = number_arg)]
    pub number: u64,

    /// Print STRING at the start of every line
    #[arg(short, long, value_name = "STRING", value_parser = clap::value_parser!(OsString))]
    pub start: Option<OsString>,

    /// Print STRING at the end of every line
    #[arg(short, long, value_name = "STRING", value_parser = clap::value_parser!(OsString))]
    pub end: Option<OsString>,

    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

fn fill_arg(s: &str) -> Result<char, String> {
    parse_fill(s).map_err(|e| e.to_string())
}

fn number_arg(s: &str) -> Result<u64, String> {
    parse_number(s).map_err(|e| e.to_string())
}

impl PadArgs {
    pub fn fill_spec(&self) -> FillSpec {
        FillSpec {
            fill: self.fill,
            number: self.number,
            start: self.start.clone().map(OsString::into_encoded_bytes),
            end: self.end.clone().map(OsString::into_encoded_bytes),
        }
    }
}

pub fn run(args: PadArgs) -> anyhow::Result<()> {
    if args.files.len() > 1 {
        anyhow::bail!(
            "expected at most one FILE, got {}\nTry 'fllt --help' for more information.",
            args.files.len()
        );
    }
    let path = args.files.first().map(PathBuf::as_path);

    let spec = args.fill_spec();
    validate_fill_spec(&spec)?;

    let source = open_source(path)?;
    let what = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    let ingested = ingest(source).with_context(|| format!("read {what}"))?;
    info!(
        input = %what,
        bytes = ingested.buffer.len(),
        max_width = ingested.max_width,
        "input buffered"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(&ingested, &spec, &mut out).context("write stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
