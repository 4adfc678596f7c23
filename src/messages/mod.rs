use tokio::sync::oneshot;

use crate::catalog::service::CatalogStatus;
use crate::catalog::{CatalogError, CatalogFetch, FetchOutcome, FetchTicket, FilterCriteria, FilterInput, Page};
use crate::domain::{Category, Product};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the catalog service. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Reloads products and categories; answered once this fetch is applied or superseded.
    Refresh {
        respond_to: ServiceResponse<FetchOutcome, CatalogError>,
    },
    SetCriteria {
        criteria: FilterCriteria,
        respond_to: ServiceResponse<usize, CatalogError>,
    },
    ApplyInput {
        input: FilterInput,
        respond_to: ServiceResponse<FilterCriteria, CatalogError>,
    },
    Clear {
        respond_to: ServiceResponse<(), CatalogError>,
    },
    VisibleProducts {
        respond_to: ServiceResponse<Vec<Product>, CatalogError>,
    },
    VisiblePage {
        page: usize,
        respond_to: ServiceResponse<Page<Product>, CatalogError>,
    },
    Categories {
        respond_to: ServiceResponse<Vec<Category>, CatalogError>,
    },
    Status {
        respond_to: ServiceResponse<CatalogStatus, CatalogError>,
    },
    /// Sent by the service's own fetch tasks.
    FetchCompleted {
        ticket: FetchTicket,
        fetch: CatalogFetch,
    },
    Shutdown,
}
