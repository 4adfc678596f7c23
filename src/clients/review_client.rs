use tracing::{debug, info, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::auth::AuthContext;
use crate::clients::ProductClient;
use crate::domain::{is_valid_rating, RatingSummary, Review, ReviewCreate, ReviewPatch};
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;

/// Client for the review store. Keeps each product's derived rating in step
/// with its reviews.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
    product_client: ProductClient,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    /// Creates the signed-in user's review of `product_id`, or replaces their
    /// earlier one, then refreshes the product's rating.
    #[instrument(fields(user_id = tracing::field::Empty), skip(self, auth, comment))]
    pub async fn submit_review(
        &self,
        auth: &AuthContext,
        product_id: String,
        rating: u8,
        comment: String,
    ) -> Result<Review, ReviewError> {
        let user = auth.require_signed_in()?;
        tracing::Span::current().record("user_id", user.id.as_str());

        if !is_valid_rating(rating) {
            return Err(ReviewError::InvalidRating(rating));
        }
        if self.product_client.get_product(product_id.clone()).await?.is_none() {
            return Err(ReviewError::UnknownProduct(product_id));
        }

        // The store refuses a second review by the same user; that refusal
        // names the existing review, which is then updated in place.
        let created = self
            .inner
            .create(ReviewCreate {
                product_id: product_id.clone(),
                user_id: user.id.clone(),
                rating,
                comment: comment.clone(),
            })
            .await;
        let review = match created {
            Ok(id) => self
                .inner
                .get(id.clone())
                .await?
                .ok_or(ReviewError::NotFound(id))?,
            Err(FrameworkError::Conflict(existing)) => {
                debug!(review_id = %existing, "Updating existing review");
                self.inner.update(existing, ReviewPatch { rating, comment }).await?
            }
            Err(e) => return Err(e.into()),
        };

        self.refresh_rating(&product_id).await?;
        info!(review_id = %review.id, rating, "Review saved");
        Ok(review)
    }

    #[instrument(skip(self))]
    pub async fn reviews_for(&self, product_id: &str) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        let reviews = self.inner.list().await?;
        Ok(reviews.into_iter().filter(|review| review.product_id == product_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn rating_summary(&self, product_id: &str) -> Result<RatingSummary, ReviewError> {
        let reviews = self.reviews_for(product_id).await?;
        Ok(RatingSummary::from_ratings(reviews.iter().map(|review| review.rating)))
    }

    /// Deletes a review and refreshes its product's rating.
    #[instrument(skip(self))]
    pub async fn delete_review(&self, id: String) -> Result<(), ReviewError> {
        let review = self
            .inner
            .get(id.clone())
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.clone()))?;
        self.inner.delete(id).await?;
        self.refresh_rating(&review.product_id).await?;
        Ok(())
    }

    async fn refresh_rating(&self, product_id: &str) -> Result<RatingSummary, ReviewError> {
        let summary = self.rating_summary(product_id).await?;
        match self.product_client.apply_rating(product_id.to_string(), summary).await {
            Ok(()) => {}
            // The product may have been deleted since; its reviews no longer matter.
            Err(ProductError::NotFound(_)) => {
                debug!(product_id, "Rated product no longer exists")
            }
            Err(e) => return Err(e.into()),
        }
        debug!(product_id, average = ?summary.average, count = summary.count, "Product rating refreshed");
        Ok(summary)
    }
}
