use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::Product;

/// One unit of a product, snapshotted when it was added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// Cart lines grouped by product.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Snapshot from the first time the product was added.
    pub product: CartLine,
    pub quantity: u32,
    /// Sum of the price snapshotted by each grouped line, not
    /// `quantity * product.price`. The two differ only when the same product
    /// was added at different prices; this way line totals always add up to
    /// the cart total.
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// The ordered cart lines of one browsing session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    lines: Vec<CartLine>,
}

impl CartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one unit of `product`. Adding the same product twice yields two lines.
    pub fn add(&mut self, product: &Product) {
        debug!(product_id = %product.id, price = %product.price, "Adding product to cart");
        self.lines.push(CartLine::from(product));
    }

    /// Removes every line for `product_id`; returns how many were removed.
    pub fn remove_all_of(&mut self, product_id: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        let removed = before - self.lines.len();
        debug!(product_id, removed, "Removed product from cart");
        removed
    }

    /// Groups lines by product in first-appearance order.
    ///
    /// `line_total` is the sum of the grouped lines' snapshotted prices, so the
    /// line totals always add up to [`CartSession::total`].
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut items: Vec<LineItem> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for line in &self.lines {
            match positions.get(line.product_id.as_str()) {
                Some(&index) => {
                    let item = &mut items[index];
                    item.quantity += 1;
                    item.line_total += line.price;
                }
                None => {
                    positions.insert(&line.product_id, items.len());
                    items.push(LineItem {
                        product: line.clone(),
                        quantity: 1,
                        line_total: line.price,
                    });
                }
            }
        }
        items
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.price).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
