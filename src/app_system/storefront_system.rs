use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use super::config::StorefrontConfig;
use super::session::StorefrontSession;
use crate::actor_framework::ResourceActor;
use crate::auth::AdminPolicy;
use crate::catalog::service::CatalogService;
use crate::clients::{
    BackOffice, CatalogClient, CategoryClient, CheckoutClient, CustomRequestClient, PaymentClient, ProductClient,
    ReviewClient,
};
use crate::domain::{Category, CustomRequest, PaymentRecord, Product, Review};

/// Returns a generator of ids like `product_1`, `product_2`, ...
fn id_generator(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{id}")
    }
}

/// Starts every store actor and the catalog service, and wires their clients together.
pub struct StorefrontSystem {
    pub catalog_client: CatalogClient,
    pub product_client: ProductClient,
    pub category_client: CategoryClient,
    pub review_client: ReviewClient,
    pub payment_client: PaymentClient,
    pub custom_request_client: CustomRequestClient,
    pub checkout_client: CheckoutClient,
    pub back_office: BackOffice,
    admin_policy: AdminPolicy,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Self {
        let buffer = config.channel_buffer.max(1);

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(buffer, id_generator("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let (category_actor, category_resource_client) =
            ResourceActor::<Category>::new(buffer, id_generator("category"));
        let category_client = CategoryClient::new(category_resource_client);
        let category_handle = tokio::spawn(category_actor.run());

        let (review_actor, review_resource_client) = ResourceActor::<Review>::new(buffer, id_generator("review"));
        let review_client = ReviewClient::new(review_resource_client, product_client.clone());
        let review_handle = tokio::spawn(review_actor.run());

        let (payment_actor, payment_resource_client) =
            ResourceActor::<PaymentRecord>::new(buffer, id_generator("payment"));
        let payment_client = PaymentClient::new(payment_resource_client);
        let payment_handle = tokio::spawn(payment_actor.run());

        let (request_actor, request_resource_client) =
            ResourceActor::<CustomRequest>::new(buffer, id_generator("request"));
        let custom_request_client = CustomRequestClient::new(request_resource_client);
        let request_handle = tokio::spawn(request_actor.run());

        let (catalog_service, catalog_client) = CatalogService::new(
            buffer,
            product_client.clone(),
            category_client.clone(),
            config.page_size,
        );
        let catalog_handle = tokio::spawn(catalog_service.run());

        let checkout_client = CheckoutClient::new(payment_client.clone());
        let back_office = BackOffice::new(
            product_client.clone(),
            category_client.clone(),
            review_client.clone(),
            payment_client.clone(),
            custom_request_client.clone(),
        );

        let admin_policy = AdminPolicy::new(&config.admin_emails);
        info!(
            admins = admin_policy.admin_count(),
            page_size = config.page_size,
            "Storefront system started"
        );

        Self {
            catalog_client,
            product_client,
            category_client,
            review_client,
            payment_client,
            custom_request_client,
            checkout_client,
            back_office,
            admin_policy,
            handles: vec![
                product_handle,
                category_handle,
                review_handle,
                payment_handle,
                request_handle,
                catalog_handle,
            ],
        }
    }

    /// A fresh guest session with an empty cart.
    pub fn session(&self) -> StorefrontSession {
        StorefrontSession::new(self.admin_policy.clone())
    }

    pub fn admin_policy(&self) -> &AdminPolicy {
        &self.admin_policy
    }

    /// Stops the catalog service, drops every client so the store actors'
    /// channels close, then waits for all tasks.
    ///
    /// Clients cloned out of the system keep their actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        if let Err(e) = self.catalog_client.shutdown().await {
            warn!(error = %e, "Catalog service already stopped");
        }

        drop(self.catalog_client);
        drop(self.checkout_client);
        drop(self.back_office);
        drop(self.review_client);
        drop(self.product_client);
        drop(self.category_client);
        drop(self.payment_client);
        drop(self.custom_request_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
