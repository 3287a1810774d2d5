use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the TF-IDF pipeline and the corpus loader.
#[derive(Error, Debug)]
pub enum Error {
    /// No documents were supplied, so no IDF or ranking can be computed.
    #[error("empty corpus")]
    EmptyCorpus,
    /// The hash space must contain at least one bucket and fit a `u32` index.
    #[error("invalid hash space size {0}: must be in 1..={max}", max = u32::MAX)]
    InvalidHashSpace(usize),
    #[error("line {line}: expected at least {needed} tab-separated fields, found {fields}")]
    MalformedRecord {
        line: usize,
        fields: usize,
        needed: usize,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
