use thiserror::Error;

use crate::domain::{capture::entities::CaptureError, inventory::entities::PersistenceError};

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Invalid input")]
    Invalid,

    #[error("Not found")]
    NotFound,

    #[error("A classification is already in progress")]
    Busy,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Internal server error")]
    InternalServerError,
}
