//! Error types for store operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerStoreError {
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] layer_model::LayerModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayerStoreError>;
