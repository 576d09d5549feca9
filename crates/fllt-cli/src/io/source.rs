// crates/fllt-cli/src/io/source.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Open the input: stdin when `path` is None, else the named file.
pub fn open_source(path: Option<&Path>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(std::io::stdin().lock())),
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open {}", p.display()))?;
            Ok(Box::new(f))
        }
    }
}
