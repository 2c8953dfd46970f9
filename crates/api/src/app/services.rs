use std::sync::Arc;
use std::time::Duration;

use storefront_catalog::{Product, ProductRepository, RepositoryError};
use storefront_core::ProductId;

/// Per-process service bundle handed to handlers via `Extension`.
///
/// Stateless beyond the repository handle; safe to share across
/// concurrent requests.
pub struct AppServices {
    repository: Arc<dyn ProductRepository>,
    lookup_timeout: Option<Duration>,
}

impl AppServices {
    pub fn new(repository: Arc<dyn ProductRepository>, lookup_timeout: Option<Duration>) -> Self {
        Self {
            repository,
            lookup_timeout,
        }
    }

    /// One repository lookup, with the optional configured deadline.
    ///
    /// Without a configured deadline the call is made inline and its outcome
    /// propagated as-is. With one, the call runs on the blocking pool and
    /// expiry collapses into the dependency-failure branch.
    pub async fn find_product(&self, id: ProductId) -> Result<Product, RepositoryError> {
        match self.lookup_timeout {
            None => self.repository.find_by_id(&id),
            Some(limit) => {
                let repository = Arc::clone(&self.repository);
                let task = tokio::task::spawn_blocking(move || repository.find_by_id(&id));

                match tokio::time::timeout(limit, task).await {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(join_err)) => {
                        Err(RepositoryError::backend(format!("lookup task failed: {join_err}")))
                    }
                    Err(_) => Err(RepositoryError::unavailable(format!(
                        "lookup timed out after {}ms",
                        limit.as_millis()
                    ))),
                }
            }
        }
    }
}
