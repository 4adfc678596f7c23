use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::criteria::FilterCriteria;
use super::error::CatalogError;
use crate::category_actor::CategoryError;
use crate::domain::{Category, Product};
use crate::product_actor::ProductError;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Sequence number of one catalog fetch. Later fetches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Everything one fetch brought back.
#[derive(Debug, Clone)]
pub struct CatalogFetch {
    pub products: Result<Vec<Product>, ProductError>,
    pub categories: Result<Vec<Category>, CategoryError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied { product_count: usize },
    /// A newer fetch was issued before this one completed; its data was discarded.
    Superseded,
    /// The fetch was current but at least one half of it failed.
    Failed(CatalogError),
}

/// Holds the full product list and the active criteria, and keeps the
/// visible subset in sync with both.
#[derive(Debug, Default)]
pub struct CatalogFilterEngine {
    products: Vec<Product>,
    categories: Vec<Category>,
    category_names: HashMap<String, String>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
    latest_ticket: u64,
    applied_ticket: Option<FetchTicket>,
    last_error: Option<CatalogError>,
}

impl CatalogFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "Catalog criteria changed");
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Matching products in original order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.visible.iter().map(|&index| &self.products[index]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.category_names = categories
            .iter()
            .map(|category| (category.id.clone(), category.name.clone()))
            .collect();
        self.categories = categories;
        self.recompute();
    }

    /// Categories for the filter dropdown, in store order.
    pub fn category_options(&self) -> &[Category] {
        &self.categories
    }

    /// Display name of the product's category, or [`UNCATEGORIZED`].
    pub fn category_name(&self, product: &Product) -> &str {
        self.resolve_category(product).unwrap_or(UNCATEGORIZED)
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        (self.latest_ticket > 0).then_some(FetchTicket(self.latest_ticket))
    }

    pub fn applied_ticket(&self) -> Option<FetchTicket> {
        self.applied_ticket
    }

    /// Whether the most recently issued fetch has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.latest_ticket() != self.applied_ticket
    }

    /// Issues the ticket for a new fetch; any older outstanding fetch becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        FetchTicket(self.latest_ticket)
    }

    /// Applies `fetch` if `ticket` is the latest issued, otherwise discards it.
    ///
    /// A failed product fetch leaves the catalog empty; a failed category fetch
    /// leaves the category list empty. Either failure is recorded and reported.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, fetch: CatalogFetch) -> FetchOutcome {
        if ticket.0 != self.latest_ticket {
            debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "Discarding stale catalog fetch"
            );
            return FetchOutcome::Superseded;
        }
        self.applied_ticket = Some(ticket);

        let mut error = None;
        let categories = fetch.categories.unwrap_or_else(|e| {
            warn!(error = %e, "Category fetch failed");
            error = Some(CatalogError::from(e));
            Vec::new()
        });
        // A product failure is the more important one to report.
        let products = fetch.products.unwrap_or_else(|e| {
            warn!(error = %e, "Product fetch failed, showing an empty catalog");
            error = Some(CatalogError::from(e));
            Vec::new()
        });

        self.category_names = categories
            .iter()
            .map(|category| (category.id.clone(), category.name.clone()))
            .collect();
        self.categories = categories;
        self.products = products;
        self.recompute();
        self.last_error = error.clone();

        match error {
            Some(error) => FetchOutcome::Failed(error),
            None => {
                info!(
                    ticket = ticket.0,
                    product_count = self.products.len(),
                    visible = self.visible.len(),
                    "Catalog loaded"
                );
                FetchOutcome::Applied {
                    product_count: self.products.len(),
                }
            }
        }
    }

    fn resolve_category(&self, product: &Product) -> Option<&str> {
        product
            .category_id
            .as_ref()
            .and_then(|id| self.category_names.get(id))
            .map(String::as_str)
    }

    fn recompute(&mut self) {
        let visible: Vec<usize> = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, product)| self.criteria.matches(product, self.resolve_category(product)))
            .map(|(index, _)| index)
            .collect();
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "Sunset", dec!(500)).with_category("A").with_rating(4.5, 2),
            Product::new("2", "Abstract", dec!(1500)).with_category("B").with_rating(3.0, 1),
        ]
    }

    fn categories() -> Vec<Category> {
        vec![Category::new("A", "Landscapes"), Category::new("B", "Modern")]
    }

    fn loaded() -> CatalogFilterEngine {
        let mut engine = CatalogFilterEngine::new();
        let ticket = engine.begin_fetch();
        let outcome = engine.apply_fetch(
            ticket,
            CatalogFetch {
                products: Ok(products()),
                categories: Ok(categories()),
            },
        );
        assert_eq!(outcome, FetchOutcome::Applied { product_count: 2 });
        engine
    }

    fn visible_ids(engine: &CatalogFilterEngine) -> Vec<String> {
        engine.visible_products().into_iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_default_criteria_shows_everything_in_order() {
        let engine = loaded();
        assert_eq!(visible_ids(&engine), vec!["1", "2"]);
    }

    #[test]
    fn test_min_price_scenario() {
        let mut engine = loaded();
        engine.set_criteria(FilterCriteria { min_price: Some(dec!(1000)), ..Default::default() });
        assert_eq!(visible_ids(&engine), vec!["2"]);
    }

    #[test]
    fn test_search_scenario() {
        let mut engine = loaded();
        engine.set_criteria(FilterCriteria { search: "sun".into(), ..Default::default() });
        assert_eq!(visible_ids(&engine), vec!["1"]);

        engine.set_criteria(FilterCriteria { search: "MODERN".into(), ..Default::default() });
        assert_eq!(visible_ids(&engine), vec!["2"]);
    }

    #[test]
    fn test_inverted_price_range_is_empty_not_an_error() {
        let mut engine = loaded();
        engine.set_criteria(FilterCriteria {
            min_price: Some(dec!(1000)),
            max_price: Some(dec!(10)),
            ..Default::default()
        });
        assert!(engine.visible_products().is_empty());
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn test_setting_same_criteria_twice_is_idempotent() {
        let mut engine = loaded();
        let criteria = FilterCriteria { min_rating: Some(4.0), ..Default::default() };
        engine.set_criteria(criteria.clone());
        let once = visible_ids(&engine);
        engine.set_criteria(criteria);
        assert_eq!(visible_ids(&engine), once);
        assert_eq!(once, vec!["1"]);
    }

    #[test]
    fn test_clear_restores_all_products() {
        let mut engine = loaded();
        engine.set_criteria(FilterCriteria { category_id: Some("B".into()), ..Default::default() });
        assert_eq!(visible_ids(&engine), vec!["2"]);
        engine.clear();
        assert!(engine.criteria().is_unconstrained());
        assert_eq!(visible_ids(&engine), vec!["1", "2"]);
    }

    #[test]
    fn test_criteria_set_before_data_arrives_is_applied() {
        let mut engine = CatalogFilterEngine::new();
        let ticket = engine.begin_fetch();
        engine.set_criteria(FilterCriteria { search: "abstract".into(), ..Default::default() });
        assert!(engine.visible_products().is_empty());
        assert!(engine.is_loading());

        engine.apply_fetch(ticket, CatalogFetch { products: Ok(products()), categories: Ok(categories()) });
        assert!(!engine.is_loading());
        assert_eq!(visible_ids(&engine), vec!["2"]);
    }

    #[test]
    fn test_out_of_order_fetches_follow_last_fetch_wins() {
        let mut engine = CatalogFilterEngine::new();
        let first = engine.begin_fetch();
        let second = engine.begin_fetch();

        let newer = vec![Product::new("9", "Fresh", dec!(10))];
        let outcome = engine.apply_fetch(second, CatalogFetch { products: Ok(newer), categories: Ok(vec![]) });
        assert_eq!(outcome, FetchOutcome::Applied { product_count: 1 });

        let outcome = engine.apply_fetch(first, CatalogFetch { products: Ok(products()), categories: Ok(vec![]) });
        assert_eq!(outcome, FetchOutcome::Superseded);
        assert_eq!(visible_ids(&engine), vec!["9"]);
        assert_eq!(engine.applied_ticket(), Some(second));
    }

    #[test]
    fn test_product_failure_empties_catalog_and_reports() {
        let mut engine = loaded();
        let ticket = engine.begin_fetch();
        let error = ProductError::ActorCommunicationError("Actor closed".into());
        let outcome = engine.apply_fetch(
            ticket,
            CatalogFetch { products: Err(error.clone()), categories: Ok(categories()) },
        );

        assert_eq!(outcome, FetchOutcome::Failed(CatalogError::Products(error.clone())));
        assert!(engine.products().is_empty());
        assert_eq!(engine.last_error(), Some(&CatalogError::Products(error)));

        // A later successful fetch clears the reported failure.
        let ticket = engine.begin_fetch();
        engine.apply_fetch(ticket, CatalogFetch { products: Ok(products()), categories: Ok(categories()) });
        assert!(engine.last_error().is_none());
        assert_eq!(engine.visible_count(), 2);
    }

    #[test]
    fn test_category_failure_keeps_products() {
        let mut engine = CatalogFilterEngine::new();
        let ticket = engine.begin_fetch();
        let outcome = engine.apply_fetch(
            ticket,
            CatalogFetch {
                products: Ok(products()),
                categories: Err(CategoryError::ActorCommunicationError("Actor closed".into())),
            },
        );
        assert!(matches!(outcome, FetchOutcome::Failed(CatalogError::Categories(_))));
        assert_eq!(engine.visible_count(), 2);
        assert!(engine.category_options().is_empty());
        assert_eq!(engine.category_name(&engine.products()[0]), UNCATEGORIZED);
    }

    #[test]
    fn test_category_names_resolve() {
        let engine = loaded();
        assert_eq!(engine.category_name(&engine.products()[1]), "Modern");
        let orphan = Product::new("7", "Orphan", dec!(1)).with_category("gone");
        assert_eq!(engine.category_name(&orphan), UNCATEGORIZED);
    }
}
