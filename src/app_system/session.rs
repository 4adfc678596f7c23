use tracing::{debug, instrument};

use super::error::CheckoutError;
use crate::auth::{AdminPolicy, AuthContext};
use crate::cart::CartSession;
use crate::clients::CheckoutClient;
use crate::domain::{Product, Role, User};

/// One shopper's view of the store: who is signed in and what is in the cart.
///
/// Signing out keeps the cart; the contents belong to the browser session,
/// not to the account.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    auth: AuthContext,
    cart: CartSession,
}

impl StorefrontSession {
    pub fn new(policy: AdminPolicy) -> Self {
        Self {
            auth: AuthContext::new(policy),
            cart: CartSession::new(),
        }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn cart(&self) -> &CartSession {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartSession {
        &mut self.cart
    }

    pub fn sign_in(&mut self, user: User) {
        self.auth.sign_in(user);
    }

    pub fn sign_out(&mut self) {
        self.auth.sign_out();
    }

    pub fn role(&self) -> Role {
        self.auth.current_user_role()
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        debug!(product_id = %product.id, "Adding to cart");
        self.cart.add(product);
    }

    #[instrument(skip(self, checkout, transaction_id))]
    pub async fn checkout(&mut self, checkout: &CheckoutClient, transaction_id: &str) -> Result<String, CheckoutError> {
        checkout.submit(&self.auth, &mut self.cart, transaction_id).await
    }
}
