use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::auth::AuthError;
use crate::product_actor::ProductError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("Cannot review unknown product: {0}")]
    UnknownProduct(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Rating update failed: {0}")]
    Product(#[from] ProductError),
    #[error("Review validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ReviewError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => ReviewError::NotFound(id),
            FrameworkError::Validation(msg) => ReviewError::ValidationError(msg),
            FrameworkError::Conflict(existing) => {
                ReviewError::ValidationError(format!("already reviewed in {existing}"))
            }
            other => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}
