use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlltError>;

#[derive(Debug, Error)]
pub enum FlltError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("input buffer growth failed (requested {requested} bytes)")]
    Alloc { requested: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
