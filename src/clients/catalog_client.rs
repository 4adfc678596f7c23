use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::catalog::service::CatalogStatus;
use crate::catalog::{CatalogError, FetchOutcome, FilterCriteria, FilterInput, Page};
use crate::domain::{Category, Product};
use crate::messages::CatalogRequest;

/// Client for the [`CatalogService`](crate::catalog::service::CatalogService).
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CatalogError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CatalogRequest::Shutdown)
            .await
            .map_err(|_| CatalogError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(CatalogClient => fn refresh() -> FetchOutcome as CatalogRequest::Refresh, Error = CatalogError);
client_method!(CatalogClient => fn set_criteria(criteria: FilterCriteria) -> usize as CatalogRequest::SetCriteria, Error = CatalogError);
client_method!(CatalogClient => fn apply_input(input: FilterInput) -> FilterCriteria as CatalogRequest::ApplyInput, Error = CatalogError);
client_method!(CatalogClient => fn clear() -> () as CatalogRequest::Clear, Error = CatalogError);
client_method!(CatalogClient => fn visible_products() -> Vec<Product> as CatalogRequest::VisibleProducts, Error = CatalogError);
client_method!(CatalogClient => fn visible_page(page: usize) -> Page<Product> as CatalogRequest::VisiblePage, Error = CatalogError);
client_method!(CatalogClient => fn categories() -> Vec<Category> as CatalogRequest::Categories, Error = CatalogError);
client_method!(CatalogClient => fn status() -> CatalogStatus as CatalogRequest::Status, Error = CatalogError);
