use std::future::Future;

use crate::category_actor::CategoryError;
use crate::domain::{Category, Product};
use crate::product_actor::ProductError;

/// Read access to every product, in store order.
pub trait ProductStore: Clone + Send + Sync + 'static {
    fn fetch_all_products(&self) -> impl Future<Output = Result<Vec<Product>, ProductError>> + Send;
}

/// Read access to every category, in store order.
pub trait CategoryStore: Clone + Send + Sync + 'static {
    fn fetch_all_categories(&self) -> impl Future<Output = Result<Vec<Category>, CategoryError>> + Send;
}
