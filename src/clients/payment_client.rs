use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{PaymentCreate, PaymentRecord, PaymentStatus};
use crate::payment_actor::{PaymentAction, PaymentError};

/// Client for interacting with the payment record store actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentRecord>,
}

crate::impl_basic_client!(PaymentClient, PaymentRecord, PaymentError, payment, payments);

impl PaymentClient {
    #[instrument(fields(transaction_id = %payment.transaction_id, amount = %payment.amount), skip(self, payment))]
    pub async fn record_payment(&self, payment: PaymentCreate) -> Result<String, PaymentError> {
        debug!("Sending request");
        self.inner.create(payment).await.map_err(PaymentError::from)
    }

    #[instrument(skip(self))]
    pub async fn verify_payment(&self, id: String) -> Result<PaymentStatus, PaymentError> {
        self.decide(id, PaymentAction::Verify).await
    }

    #[instrument(skip(self))]
    pub async fn reject_payment(&self, id: String) -> Result<PaymentStatus, PaymentError> {
        self.decide(id, PaymentAction::Reject).await
    }

    async fn decide(&self, id: String, action: PaymentAction) -> Result<PaymentStatus, PaymentError> {
        debug!("Sending request");
        let status = self.inner.perform_action(id, action).await?;
        info!(%status, "Payment status changed");
        Ok(status)
    }
}
