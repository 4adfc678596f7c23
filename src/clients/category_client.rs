use std::future::Future;

use tracing::{debug, instrument, warn};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::catalog::CategoryStore;
use crate::category_actor::{normalize_name, CategoryError};
use crate::domain::{Category, CategoryCreate, CategoryPatch};

/// Client for interacting with the Category store actor.
///
/// Name uniqueness is enforced by the store itself; a clash comes back as
/// [`CategoryError::DuplicateName`] carrying the requested name.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

crate::impl_basic_client!(CategoryClient, Category, CategoryError, category, categories);

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, name: String) -> Result<String, CategoryError> {
        debug!("Sending request");
        let name = normalize_name(&name)?;
        self.inner
            .create(CategoryCreate { name: name.clone() })
            .await
            .map_err(|e| duplicate_as_name(e, &name))
    }

    #[instrument(skip(self))]
    pub async fn rename_category(&self, id: String, name: String) -> Result<Category, CategoryError> {
        debug!("Sending request");
        let name = normalize_name(&name)?;
        self.inner
            .update(id, CategoryPatch { name: name.clone() })
            .await
            .map_err(|e| duplicate_as_name(e, &name))
    }
}

fn duplicate_as_name(error: FrameworkError, name: &str) -> CategoryError {
    match error {
        FrameworkError::Conflict(existing) => {
            warn!(name, existing = %existing, "Duplicate category name");
            CategoryError::DuplicateName(name.to_string())
        }
        other => other.into(),
    }
}

impl CategoryStore for CategoryClient {
    fn fetch_all_categories(&self) -> impl Future<Output = Result<Vec<Category>, CategoryError>> + Send {
        self.list_categories()
    }
}
