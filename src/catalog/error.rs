use thiserror::Error;

use crate::category_actor::CategoryError;
use crate::product_actor::ProductError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Could not load products: {0}")]
    Products(#[from] ProductError),
    #[error("Could not load categories: {0}")]
    Categories(#[from] CategoryError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
