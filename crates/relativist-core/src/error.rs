use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelativistError>;

#[derive(Debug, Error)]
pub enum RelativistError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("backup error: {0}")]
    Backup(String),

    #[error("backup checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("store error: {0}")]
    Store(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
