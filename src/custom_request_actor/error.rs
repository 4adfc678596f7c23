use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomRequestError {
    #[error("Custom request not found: {0}")]
    NotFound(String),
    #[error("Custom request validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CustomRequestError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(id) => CustomRequestError::NotFound(id),
            FrameworkError::Validation(msg) => CustomRequestError::ValidationError(msg),
            other => CustomRequestError::ActorCommunicationError(other.to_string()),
        }
    }
}
