use rust_decimal::Decimal;

use super::actions::ProductAction;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Product, ProductCreate, ProductPatch};

fn validate_name(name: &str) -> Result<String, FrameworkError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FrameworkError::Validation("product name is required".into()));
    }
    Ok(name.to_string())
}

fn validate_price(price: Decimal) -> Result<Decimal, FrameworkError> {
    if price < Decimal::ZERO {
        return Err(FrameworkError::Validation(format!("price must not be negative: {price}")));
    }
    Ok(price)
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ();

    /// Creates an unrated Product.
    ///
    /// # Errors
    /// Rejects a blank name or a negative price.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: validate_name(&params.name)?,
            price: validate_price(params.price)?,
            description: params.description,
            image_url: params.image_url,
            category_id: params.category_id,
            average_rating: None,
            review_count: 0,
        })
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = validate_name(&name)?;
        }
        if let Some(price) = patch.price {
            self.price = validate_price(price)?;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<(), FrameworkError> {
        match action {
            ProductAction::ApplyRating(summary) => {
                self.average_rating = summary.average;
                self.review_count = summary.count;
                Ok(())
            }
        }
    }
}
