use rust_decimal::Decimal;

/// An artwork listed in the catalog.
///
/// `average_rating` and `review_count` are derived from reviews and are only
/// changed through [`ProductAction::ApplyRating`](crate::product_actor::ProductAction).
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category_id: Option<String>,
    pub average_rating: Option<f64>,
    pub review_count: u32,
}

impl Product {
    /// Creates a product with no description, image, category or reviews.
    ///
    /// # Arguments
    /// * `id` - Identifier (ignored when the product is created through a store)
    /// * `name` - Display name
    /// * `price` - Unit price
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image_url: String::new(),
            category_id: None,
            average_rating: None,
            review_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_rating(mut self, average: f64, review_count: u32) -> Self {
        self.average_rating = Some(average);
        self.review_count = review_count;
        self
    }

    /// Average rating, counting an unrated product as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }
}

/// Parameters for creating a product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category_id: Option<String>,
}

impl From<Product> for ProductCreate {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
            image_url: product.image_url,
            category_id: product.category_id,
        }
    }
}

/// Partial update of a product's editable fields.
///
/// `category_id: Some(None)` moves the product to "uncategorized".
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Option<String>>,
}
