// crates/fllt-cli/src/io/mod.rs

pub mod source;
