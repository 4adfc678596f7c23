use rust_decimal::Decimal;

use super::actions::PaymentAction;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{PaymentCreate, PaymentRecord, PaymentStatus};

impl Entity for PaymentRecord {
    type Id = String;
    type CreateParams = PaymentCreate;
    type Patch = ();
    type Action = PaymentAction;
    type ActionResult = PaymentStatus;

    /// Records a pending payment.
    ///
    /// # Errors
    /// Rejects a blank transaction id, an order with no items, or a non-positive amount.
    fn from_create_params(id: String, params: PaymentCreate) -> Result<Self, FrameworkError> {
        let transaction_id = params.transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(FrameworkError::Validation("transaction id is required".into()));
        }
        if params.items.is_empty() {
            return Err(FrameworkError::Validation("payment has no items".into()));
        }
        if params.amount <= Decimal::ZERO {
            return Err(FrameworkError::Validation(format!("invalid amount: {}", params.amount)));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            user_email: params.user_email,
            transaction_id: transaction_id.to_string(),
            amount: params.amount,
            items: params.items,
            status: PaymentStatus::Pending,
        })
    }

    /// Payment records are immutable apart from their status.
    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Ok(())
    }

    /// Only pending payments can be verified or rejected.
    fn handle_action(&mut self, action: PaymentAction) -> Result<PaymentStatus, FrameworkError> {
        if self.status != PaymentStatus::Pending {
            return Err(FrameworkError::Validation(format!(
                "payment {} is already {}",
                self.id, self.status
            )));
        }
        self.status = match action {
            PaymentAction::Verify => PaymentStatus::Verified,
            PaymentAction::Reject => PaymentStatus::Rejected,
        };
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartSession;
    use crate::domain::Product;
    use rust_decimal_macros::dec;

    fn pending() -> PaymentRecord {
        let mut cart = CartSession::new();
        cart.add(&Product::new("product_1", "Sunset", dec!(500)));
        PaymentRecord::from_create_params(
            "payment_1".into(),
            PaymentCreate {
                user_id: "user_1".into(),
                user_email: "shopper@example.com".into(),
                transaction_id: " UPI-42 ".into(),
                amount: cart.total(),
                items: cart.line_items(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_payment_is_pending_with_trimmed_transaction() {
        let payment = pending();
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.transaction_id, "UPI-42");
    }

    #[test]
    fn test_status_changes_only_once() {
        let mut payment = pending();
        assert_eq!(payment.handle_action(PaymentAction::Verify).unwrap(), PaymentStatus::Verified);
        assert!(payment.handle_action(PaymentAction::Reject).is_err());
        assert_eq!(payment.status, PaymentStatus::Verified);
    }
}
