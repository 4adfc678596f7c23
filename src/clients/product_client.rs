use std::future::Future;

use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog::ProductStore;
use crate::domain::{Product, ProductCreate, ProductPatch, RatingSummary};
use crate::product_actor::{ProductAction, ProductError};

/// Client for interacting with the Product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductError, product, products);

impl ProductClient {
    /// Stores `product`, ignoring its `id` and rating fields; returns the new id.
    #[instrument(fields(product_name = %product.name), skip(self, product))]
    pub async fn create_product(&self, product: Product) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(ProductCreate::from(product)).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn apply_rating(&self, id: String, summary: RatingSummary) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ProductAction::ApplyRating(summary))
            .await
            .map_err(ProductError::from)
    }
}

impl ProductStore for ProductClient {
    fn fetch_all_products(&self) -> impl Future<Output = Result<Vec<Product>, ProductError>> + Send {
        self.list_products()
    }
}
