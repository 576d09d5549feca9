//! Line-padding text filter core.
//!
//! Two passes over a fully buffered input: [`ingest`] measures the widest
//! line in code points, then [`emit`] replays the buffer and pads every line
//! to that width with the configured fill character.

pub mod error;
pub mod validate;

pub mod config;
pub mod emit;
pub mod ingest;
pub mod width;

pub use crate::config::FillSpec;
pub use crate::emit::{emit, emit_to_vec, target_width, EmitMode};
pub use crate::error::{FlltError, Result};
pub use crate::ingest::{ingest, ingest_bytes, ingest_into, Ingest, InputBuffer};
