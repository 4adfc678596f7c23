use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn, Instrument};

use super::engine::{CatalogFetch, CatalogFilterEngine, FetchOutcome, FetchTicket};
use super::error::CatalogError;
use super::pagination::paginate;
use super::store::{CategoryStore, ProductStore};
use super::FilterCriteria;
use crate::clients::CatalogClient;
use crate::messages::{CatalogRequest, ServiceResponse};

/// Snapshot of the catalog's loading state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStatus {
    pub loading: bool,
    pub latest_ticket: Option<FetchTicket>,
    pub applied_ticket: Option<FetchTicket>,
    pub product_count: usize,
    pub visible_count: usize,
    pub last_error: Option<CatalogError>,
}

/// Owns the [`CatalogFilterEngine`] and feeds it from the product and category stores.
///
/// Fetches run in spawned tasks and report back through a weak sender, so the
/// service keeps answering filter requests while a fetch is in flight and
/// still stops once every [`CatalogClient`] is dropped.
pub struct CatalogService<P: ProductStore, C: CategoryStore> {
    receiver: mpsc::Receiver<CatalogRequest>,
    self_sender: mpsc::WeakSender<CatalogRequest>,
    products: P,
    categories: C,
    engine: CatalogFilterEngine,
    page_size: usize,
    pending: Vec<(FetchTicket, ServiceResponse<FetchOutcome, CatalogError>)>,
}

impl<P: ProductStore, C: CategoryStore> CatalogService<P, C> {
    pub fn new(buffer_size: usize, products: P, categories: C, page_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            self_sender: sender.downgrade(),
            products,
            categories,
            engine: CatalogFilterEngine::new(),
            page_size,
            pending: Vec::new(),
        };
        (service, CatalogClient::new(sender))
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Refresh { respond_to } => self.handle_refresh(respond_to),
                CatalogRequest::SetCriteria { criteria, respond_to } => {
                    self.engine.set_criteria(criteria);
                    let _ = respond_to.send(Ok(self.engine.visible_count()));
                }
                CatalogRequest::ApplyInput { input, respond_to } => {
                    let criteria = FilterCriteria::from(&input);
                    self.engine.set_criteria(criteria.clone());
                    let _ = respond_to.send(Ok(criteria));
                }
                CatalogRequest::Clear { respond_to } => {
                    self.engine.clear();
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::VisibleProducts { respond_to } => {
                    let products = self.engine.visible_products().into_iter().cloned().collect();
                    let _ = respond_to.send(Ok(products));
                }
                CatalogRequest::VisiblePage { page, respond_to } => {
                    let visible: Vec<_> = self.engine.visible_products().into_iter().cloned().collect();
                    let _ = respond_to.send(Ok(paginate(&visible, page, self.page_size)));
                }
                CatalogRequest::Categories { respond_to } => {
                    let _ = respond_to.send(Ok(self.engine.category_options().to_vec()));
                }
                CatalogRequest::Status { respond_to } => {
                    let _ = respond_to.send(Ok(self.status()));
                }
                CatalogRequest::FetchCompleted { ticket, fetch } => self.handle_fetch_completed(ticket, fetch),
                CatalogRequest::Shutdown => {
                    info!("CatalogService shutting down");
                    break;
                }
            }
        }
        info!("CatalogService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_refresh(&mut self, respond_to: ServiceResponse<FetchOutcome, CatalogError>) {
        let ticket = self.engine.begin_fetch();
        debug!(ticket = ticket.sequence(), "Starting catalog fetch");
        self.pending.push((ticket, respond_to));

        let products = self.products.clone();
        let categories = self.categories.clone();
        let reply_to = self.self_sender.clone();
        let span = tracing::info_span!("catalog_fetch", ticket = ticket.sequence());
        tokio::spawn(
            async move {
                let (products, categories) =
                    tokio::join!(products.fetch_all_products(), categories.fetch_all_categories());
                let fetch = CatalogFetch { products, categories };
                match reply_to.upgrade() {
                    Some(sender) => {
                        let _ = sender.send(CatalogRequest::FetchCompleted { ticket, fetch }).await;
                    }
                    None => debug!("CatalogService gone, dropping fetch result"),
                }
            }
            .instrument(span),
        );
    }

    #[instrument(fields(ticket = ticket.sequence()), skip(self, fetch))]
    fn handle_fetch_completed(&mut self, ticket: FetchTicket, fetch: CatalogFetch) {
        let outcome = self.engine.apply_fetch(ticket, fetch);
        if let FetchOutcome::Failed(error) = &outcome {
            warn!(error = %error, "Catalog fetch failed");
        }

        let (finished, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|(t, _)| *t == ticket);
        self.pending = waiting;
        for (_, respond_to) in finished {
            let _ = respond_to.send(Ok(outcome.clone()));
        }
    }

    fn status(&self) -> CatalogStatus {
        CatalogStatus {
            loading: self.engine.is_loading(),
            latest_ticket: self.engine.latest_ticket(),
            applied_ticket: self.engine.applied_ticket(),
            product_count: self.engine.products().len(),
            visible_count: self.engine.visible_count(),
            last_error: self.engine.last_error().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_actor::CategoryError;
    use crate::catalog::FilterInput;
    use crate::domain::{Category, Product};
    use crate::product_actor::ProductError;
    use rust_decimal_macros::dec;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    type Gate = oneshot::Receiver<Result<Vec<Product>, ProductError>>;

    /// Product store whose N-th fetch completes when the test releases the N-th gate.
    #[derive(Clone, Default)]
    struct GatedProducts {
        gates: Arc<Mutex<VecDeque<Gate>>>,
        calls: Arc<AtomicUsize>,
    }

    impl GatedProducts {
        fn gate(&self) -> oneshot::Sender<Result<Vec<Product>, ProductError>> {
            let (release, gate) = oneshot::channel();
            self.gates.lock().unwrap().push_back(gate);
            release
        }

        async fn wait_for_calls(&self, expected: usize) {
            while self.calls.load(Ordering::SeqCst) < expected {
                tokio::task::yield_now().await;
            }
        }
    }

    impl ProductStore for GatedProducts {
        fn fetch_all_products(&self) -> impl Future<Output = Result<Vec<Product>, ProductError>> + Send {
            let gate = self.gates.lock().unwrap().pop_front();
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                match gate {
                    Some(gate) => gate
                        .await
                        .unwrap_or_else(|_| Err(ProductError::ActorCommunicationError("gate dropped".into()))),
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    #[derive(Clone)]
    struct StaticCategories(Result<Vec<Category>, CategoryError>);

    impl CategoryStore for StaticCategories {
        fn fetch_all_categories(&self) -> impl Future<Output = Result<Vec<Category>, CategoryError>> + Send {
            let result = self.0.clone();
            async move { result }
        }
    }

    fn start(products: GatedProducts, categories: StaticCategories) -> CatalogClient {
        let (service, client) = CatalogService::new(16, products, categories, 1);
        tokio::spawn(service.run());
        client
    }

    fn artworks() -> Vec<Product> {
        vec![
            Product::new("1", "Sunset", dec!(500)).with_category("A").with_rating(4.5, 2),
            Product::new("2", "Abstract", dec!(1500)).with_category("B").with_rating(3.0, 1),
        ]
    }

    fn landscapes() -> StaticCategories {
        StaticCategories(Ok(vec![Category::new("A", "Landscapes"), Category::new("B", "Modern")]))
    }

    #[tokio::test]
    async fn test_filter_edit_before_first_fetch_is_retained() {
        let products = GatedProducts::default();
        let release = products.gate();
        let client = start(products.clone(), landscapes());

        let refresh = tokio::spawn({
            let client = client.clone();
            async move { client.refresh().await }
        });
        products.wait_for_calls(1).await;

        let criteria = client
            .apply_input(FilterInput { min_price: "1000".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(criteria.min_price, Some(dec!(1000)));
        assert!(client.status().await.unwrap().loading);

        release.send(Ok(artworks())).unwrap();
        assert_eq!(refresh.await.unwrap().unwrap(), FetchOutcome::Applied { product_count: 2 });

        let visible = client.visible_products().await.unwrap();
        assert_eq!(visible.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
        assert!(!client.status().await.unwrap().loading);
    }

    #[tokio::test]
    async fn test_slow_stale_fetch_does_not_overwrite_newer_one() {
        let products = GatedProducts::default();
        let release_first = products.gate();
        let release_second = products.gate();
        let client = start(products.clone(), landscapes());

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.refresh().await }
        });
        products.wait_for_calls(1).await;
        let second = tokio::spawn({
            let client = client.clone();
            async move { client.refresh().await }
        });
        products.wait_for_calls(2).await;

        release_second.send(Ok(vec![Product::new("9", "Fresh", dec!(10))])).unwrap();
        assert_eq!(second.await.unwrap().unwrap(), FetchOutcome::Applied { product_count: 1 });

        release_first.send(Ok(artworks())).unwrap();
        assert_eq!(first.await.unwrap().unwrap(), FetchOutcome::Superseded);

        let visible = client.visible_products().await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "9");
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_and_leaves_empty_catalog() {
        let products = GatedProducts::default();
        let release = products.gate();
        let client = start(products.clone(), landscapes());

        let refresh = tokio::spawn({
            let client = client.clone();
            async move { client.refresh().await }
        });
        products.wait_for_calls(1).await;
        let error = ProductError::ActorCommunicationError("Actor closed".into());
        release.send(Err(error.clone())).unwrap();

        let outcome = refresh.await.unwrap().unwrap();
        assert_eq!(outcome, FetchOutcome::Failed(CatalogError::Products(error.clone())));

        let status = client.status().await.unwrap();
        assert_eq!(status.product_count, 0);
        assert_eq!(status.last_error, Some(CatalogError::Products(error)));
        assert!(client.visible_products().await.unwrap().is_empty());
        // Categories still load for the dropdown.
        assert_eq!(client.categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pages_follow_visible_products() {
        let products = GatedProducts::default();
        let release = products.gate();
        let client = start(products.clone(), landscapes());

        let refresh = tokio::spawn({
            let client = client.clone();
            async move { client.refresh().await }
        });
        products.wait_for_calls(1).await;
        release.send(Ok(artworks())).unwrap();
        refresh.await.unwrap().unwrap();

        let page = client.visible_page(2).await.unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].id, "2");

        client.set_criteria(FilterCriteria { search: "sun".into(), ..Default::default() }).await.unwrap();
        let page = client.visible_page(2).await.unwrap();
        assert_eq!((page.page, page.total_pages), (1, 1));
        assert_eq!(page.items[0].id, "1");

        client.clear().await.unwrap();
        assert_eq!(client.visible_products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_stops_service() {
        let (service, client) = CatalogService::new(4, GatedProducts::default(), landscapes(), 12);
        let handle = tokio::spawn(service.run());
        client.shutdown().await.unwrap();
        handle.await.unwrap();
        assert!(client.status().await.is_err());
    }
}
