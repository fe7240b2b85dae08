use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed value under '{key}': {reason}")]
    Malformed {
        key: String,
        reason: String,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;
