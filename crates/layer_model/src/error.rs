//! Error types for layer document validation

use crate::LayerId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerModelError {
    #[error("Duplicate layer id {id} in page {page}")]
    DuplicateId { page: LayerId, id: LayerId },

    #[error("Page {0} must not have a parent")]
    PageHasParent(LayerId),

    #[error("Layer {id} is owned by {owner} but points at parent {recorded:?}")]
    ParentMismatch {
        id: LayerId,
        owner: LayerId,
        recorded: Option<LayerId>,
    },
}

pub type Result<T> = std::result::Result<T, LayerModelError>;
