use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported archive format")]
    UnsupportedFormat,

    #[error("archive is corrupted")]
    Corrupted,

    #[error("entry name cannot be decoded")]
    InvalidEntryName,

    #[error("failed to allocate staging file: {source}")]
    Staging { source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
