use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::custom_request_actor::{CustomRequestError, RequestAction};
use crate::domain::{CustomRequest, CustomRequestCreate, RequestStatus};

/// Client for interacting with the custom-request store actor.
#[derive(Clone)]
pub struct CustomRequestClient {
    inner: ResourceClient<CustomRequest>,
}

crate::impl_basic_client!(CustomRequestClient, CustomRequest, CustomRequestError, custom_request, custom_requests);

impl CustomRequestClient {
    /// Submits a shopper's request; open to guests.
    #[instrument(fields(email = %request.email), skip(self, request))]
    pub async fn submit(&self, request: CustomRequestCreate) -> Result<String, CustomRequestError> {
        debug!("Sending request");
        let id = self.inner.create(request).await?;
        info!(request_id = %id, "Custom request submitted");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: String) -> Result<RequestStatus, CustomRequestError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, RequestAction::Approve).await?)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: String) -> Result<RequestStatus, CustomRequestError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, RequestAction::Reject).await?)
    }
}
