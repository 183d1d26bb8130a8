use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
