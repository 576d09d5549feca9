// crates/fllt-cli/src/cmd/mod.rs

pub mod pad;
