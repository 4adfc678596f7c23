use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),
    #[error("Category already exists: {0}")]
    DuplicateName(String),
    #[error("Category {id} is used by {product_count} product(s)")]
    InUse { id: String, product_count: usize },
    #[error("Category validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CategoryError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::Validation(msg) => CategoryError::ValidationError(msg),
            FrameworkError::Conflict(existing) => CategoryError::DuplicateName(existing),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
