//! Persistence errors

use thiserror::Error;

/// Failure reading or writing the progress blob
///
/// Never fatal: loads fall back to defaults, saves are logged and dropped.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
