use rust_decimal::Decimal;
use tracing::{error, info, instrument, warn};

use crate::app_system::CheckoutError;
use crate::auth::AuthContext;
use crate::cart::CartSession;
use crate::clients::PaymentClient;
use crate::domain::PaymentCreate;

/// Turns a session cart into a pending payment record.
///
/// The shopper pays by scanning the shop's QR code and then types the
/// transaction id their payment app showed; nothing is charged here.
#[derive(Clone)]
pub struct CheckoutClient {
    payment_client: PaymentClient,
}

impl CheckoutClient {
    pub fn new(payment_client: PaymentClient) -> Self {
        Self { payment_client }
    }

    /// Records the payment and empties the cart; returns the payment record id.
    ///
    /// # Errors
    /// Rejects an empty or free cart, a blank transaction id, or a guest session before
    /// anything is written. The cart is left untouched on any error.
    #[instrument(fields(cart_lines = cart.len()), skip(self, auth, cart, transaction_id))]
    pub async fn submit(
        &self,
        auth: &AuthContext,
        cart: &mut CartSession,
        transaction_id: &str,
    ) -> Result<String, CheckoutError> {
        if cart.is_empty() {
            warn!("Checkout attempted with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }
        let amount = cart.total();
        if amount <= Decimal::ZERO {
            warn!(%amount, "Checkout attempted with a zero total");
            return Err(CheckoutError::NothingToPay(amount));
        }
        let transaction_id = transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(CheckoutError::MissingTransactionId);
        }
        let user = auth.require_signed_in()?;

        let payment = PaymentCreate {
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            transaction_id: transaction_id.to_string(),
            amount,
            items: cart.line_items(),
        };

        let payment_id = self.payment_client.record_payment(payment).await.map_err(|e| {
            error!(error = %e, "Recording payment failed");
            CheckoutError::from(e)
        })?;

        info!(payment_id = %payment_id, %amount, "Payment recorded");
        cart.clear();
        Ok(payment_id)
    }
}
