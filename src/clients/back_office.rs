use tracing::{debug, info, instrument, warn};

use crate::app_system::BackOfficeError;
use crate::auth::AuthContext;
use crate::category_actor::CategoryError;
use crate::clients::{CategoryClient, CustomRequestClient, PaymentClient, ProductClient, ReviewClient};
use crate::domain::{
    Category, CustomRequest, DashboardStats, PaymentRecord, PaymentStatus, Product, ProductPatch, RequestStatus, Review,
};

/// Admin-only management of the shop. Every method checks
/// [`AuthContext::require_admin`] before touching a store.
#[derive(Clone)]
pub struct BackOffice {
    products: ProductClient,
    categories: CategoryClient,
    reviews: ReviewClient,
    payments: PaymentClient,
    requests: CustomRequestClient,
}

impl BackOffice {
    pub fn new(
        products: ProductClient,
        categories: CategoryClient,
        reviews: ReviewClient,
        payments: PaymentClient,
        requests: CustomRequestClient,
    ) -> Self {
        Self {
            products,
            categories,
            reviews,
            payments,
            requests,
        }
    }

    // --- Products ---

    #[instrument(fields(product_name = %product.name), skip(self, auth, product))]
    pub async fn create_product(&self, auth: &AuthContext, product: Product) -> Result<String, BackOfficeError> {
        auth.require_admin()?;
        if let Some(category_id) = &product.category_id {
            self.ensure_category_exists(category_id).await?;
        }
        let id = self.products.create_product(product).await?;
        info!(product_id = %id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self, auth))]
    pub async fn update_product(
        &self,
        auth: &AuthContext,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, BackOfficeError> {
        auth.require_admin()?;
        if let Some(Some(category_id)) = &patch.category_id {
            self.ensure_category_exists(category_id).await?;
        }
        Ok(self.products.update_product(id, patch).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn delete_product(&self, auth: &AuthContext, id: String) -> Result<(), BackOfficeError> {
        auth.require_admin()?;
        self.products.delete_product(id).await?;
        info!("Product deleted");
        Ok(())
    }

    #[instrument(skip(self, auth))]
    pub async fn list_products(&self, auth: &AuthContext) -> Result<Vec<Product>, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.products.list_products().await?)
    }

    // --- Categories ---

    #[instrument(skip(self, auth))]
    pub async fn create_category(&self, auth: &AuthContext, name: String) -> Result<String, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.categories.create_category(name).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn rename_category(
        &self,
        auth: &AuthContext,
        id: String,
        name: String,
    ) -> Result<Category, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.categories.rename_category(id, name).await?)
    }

    /// Refuses to delete a category while any product still uses it.
    #[instrument(skip(self, auth))]
    pub async fn delete_category(&self, auth: &AuthContext, id: String) -> Result<(), BackOfficeError> {
        auth.require_admin()?;
        let product_count = self
            .products
            .list_products()
            .await?
            .iter()
            .filter(|product| product.category_id.as_deref() == Some(id.as_str()))
            .count();
        if product_count > 0 {
            warn!(product_count, "Category still in use");
            return Err(CategoryError::InUse { id, product_count }.into());
        }
        Ok(self.categories.delete_category(id).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn list_categories(&self, auth: &AuthContext) -> Result<Vec<Category>, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.categories.list_categories().await?)
    }

    // --- Reviews ---

    #[instrument(skip(self, auth))]
    pub async fn list_reviews(&self, auth: &AuthContext) -> Result<Vec<Review>, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.reviews.list_reviews().await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn delete_review(&self, auth: &AuthContext, id: String) -> Result<(), BackOfficeError> {
        auth.require_admin()?;
        Ok(self.reviews.delete_review(id).await?)
    }

    // --- Payments ---

    #[instrument(skip(self, auth))]
    pub async fn list_payments(&self, auth: &AuthContext) -> Result<Vec<PaymentRecord>, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.payments.list_payments().await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn verify_payment(&self, auth: &AuthContext, id: String) -> Result<PaymentStatus, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.payments.verify_payment(id).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn reject_payment(&self, auth: &AuthContext, id: String) -> Result<PaymentStatus, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.payments.reject_payment(id).await?)
    }

    // --- Custom requests ---

    #[instrument(skip(self, auth))]
    pub async fn list_custom_requests(&self, auth: &AuthContext) -> Result<Vec<CustomRequest>, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.requests.list_custom_requests().await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn approve_request(&self, auth: &AuthContext, id: String) -> Result<RequestStatus, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.requests.approve(id).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn reject_request(&self, auth: &AuthContext, id: String) -> Result<RequestStatus, BackOfficeError> {
        auth.require_admin()?;
        Ok(self.requests.reject(id).await?)
    }

    // --- Dashboard ---

    /// Sales, order and catalog totals for the dashboard; the payment history
    /// itself comes from [`BackOffice::list_payments`].
    #[instrument(skip(self, auth))]
    pub async fn dashboard_stats(&self, auth: &AuthContext) -> Result<DashboardStats, BackOfficeError> {
        auth.require_admin()?;
        let (payments, requests, products, categories) = tokio::join!(
            self.payments.list_payments(),
            self.requests.list_custom_requests(),
            self.products.list_products(),
            self.categories.list_categories(),
        );
        let stats = DashboardStats::compute(&payments?, &requests?, products?.len(), categories?.len());
        debug!(total_sales = %stats.total_sales, orders = stats.total_orders, "Dashboard stats computed");
        Ok(stats)
    }

    async fn ensure_category_exists(&self, category_id: &str) -> Result<(), BackOfficeError> {
        match self.categories.get_category(category_id.to_string()).await? {
            Some(_) => Ok(()),
            None => Err(CategoryError::NotFound(category_id.to_string()).into()),
        }
    }
}
