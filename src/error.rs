use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("distance matrix computation was cancelled")]
    Cancelled,

    #[error("invalid corpus at sequence {sequence}: {reason}")]
    InvalidCorpus { sequence: usize, reason: String },

    #[error("index {index} out of range for {len} sequences")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("shape error: {0}")]
    Shape(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
