use rust_decimal_macros::dec;
use tracing::{error, info, Instrument};

use atelier_storefront::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
use atelier_storefront::catalog::{page_window, FilterInput};
use atelier_storefront::domain::{CustomRequestCreate, Product, User};

const DEMO_ADMIN: &str = "owner@atelier.test";

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let mut config = StorefrontConfig::load();
    if config.admin_emails.is_empty() {
        config = config.with_admin(DEMO_ADMIN);
    }

    info!("Starting storefront");
    let system = StorefrontSystem::new(&config);

    // Seed the stores through the back office
    let mut admin = system.session();
    admin.sign_in(User::new("admin_1", config.admin_emails[0].clone()));

    let span = tracing::info_span!("seeding");
    async {
        let back_office = &system.back_office;
        let landscapes = back_office.create_category(admin.auth(), "Landscapes".into()).await?;
        let modern = back_office.create_category(admin.auth(), "Modern".into()).await?;

        let artworks = [
            Product::new("", "Sunset over the bay", dec!(500)).with_category(landscapes.as_str()),
            Product::new("", "Morning fields", dec!(350)).with_category(landscapes.as_str()),
            Product::new("", "Abstract no. 4", dec!(1500)).with_category(modern.as_str()),
            Product::new("", "Untitled sketch", dec!(80)),
        ];
        for artwork in artworks {
            back_office.create_product(admin.auth(), artwork).await?;
        }
        info!("Catalog seeded");
        Ok::<_, atelier_storefront::app_system::BackOfficeError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    // Browse
    let catalog = &system.catalog_client;
    let outcome = catalog.refresh().await.map_err(|e| e.to_string())?;
    info!(?outcome, "Catalog refreshed");

    let criteria = catalog
        .apply_input(FilterInput {
            search: "sun".into(),
            ..Default::default()
        })
        .await
        .map_err(|e| e.to_string())?;
    let matches = catalog.visible_products().await.map_err(|e| e.to_string())?;
    info!(?criteria, matches = matches.len(), "Filtered catalog");

    catalog.clear().await.map_err(|e| e.to_string())?;
    let page = catalog.visible_page(1).await.map_err(|e| e.to_string())?;
    let window = page_window(page.page, page.total_pages);
    info!(
        page = page.page,
        total_pages = page.total_pages,
        items = page.items.len(),
        buttons = ?window.pages,
        "First page"
    );

    // Shop and check out
    let mut shopper = system.session();
    shopper.sign_in(User::new("user_1", "buyer@example.com"));
    for product in page.items.iter().take(2) {
        shopper.add_to_cart(product);
    }
    if let Some(first) = page.items.first() {
        shopper.add_to_cart(first);
    }
    info!(lines = shopper.cart().len(), total = %shopper.cart().total(), "Cart ready");

    let span = tracing::info_span!("checkout");
    match shopper
        .checkout(&system.checkout_client, "TXN-20240501-0042")
        .instrument(span)
        .await
    {
        Ok(payment_id) => {
            info!(payment_id = %payment_id, "Payment submitted for verification");
            match system.back_office.verify_payment(admin.auth(), payment_id).await {
                Ok(status) => info!(%status, "Payment reviewed"),
                Err(e) => error!(error = %e, "Payment review failed"),
            }
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // Review what was bought
    if let Some(first) = page.items.first() {
        let review = system
            .review_client
            .submit_review(shopper.auth(), first.id.clone(), 5, "Even better in person".into())
            .await
            .map_err(|e| e.to_string())?;
        let summary = system
            .review_client
            .rating_summary(&review.product_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(average = ?summary.average, count = summary.count, "Review posted");
    }

    // A commission request from a guest
    let request_id = system
        .custom_request_client
        .submit(CustomRequestCreate {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            description: "A small portrait of my dog".into(),
        })
        .await
        .map_err(|e| e.to_string())?;
    let status = system
        .back_office
        .approve_request(admin.auth(), request_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(%status, "Custom request handled");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront demo completed successfully");
    Ok(())
}
