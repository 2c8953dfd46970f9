use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Failure signaled by a repository lookup.
///
/// `NotFound` is the only outcome the lookup surface distinguishes; all
/// other variants are dependency faults and surface identically upstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No entity matches the requested identifier.
    #[error("not found")]
    NotFound,

    /// The backing store could not be reached (connectivity, timeout).
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed internally.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Entity Repository contract consumed by the lookup surface.
///
/// Implementations decide storage technology; callers must stay
/// polymorphic over `dyn ProductRepository`.
pub trait ProductRepository: Send + Sync {
    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        (**self).find_by_id(id)
    }
}

/// In-memory repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a product, keyed by its identifier.
    pub fn insert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id().clone(), product);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let map = self
            .inner
            .read()
            .map_err(|_| RepositoryError::backend("repository lock poisoned"))?;

        map.get(id).cloned().ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product::new(ProductId::new(id).unwrap(), name).unwrap()
    }

    #[test]
    fn find_by_id_returns_inserted_product() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("7", "Pencil"));

        let found = repo.find_by_id(&ProductId::new("7").unwrap()).unwrap();
        assert_eq!(found.name(), "Pencil");
    }

    #[test]
    fn find_by_id_signals_not_found_for_absent_product() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("7", "Pencil"));

        let err = repo.find_by_id(&ProductId::new("999").unwrap()).unwrap_err();
        assert_eq!(err, RepositoryError::NotFound);
    }

    #[test]
    fn insert_replaces_existing_product() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product("7", "Pencil"));
        repo.insert(product("7", "Mechanical Pencil"));

        assert_eq!(repo.len(), 1);
        let found = repo.find_by_id(&ProductId::new("7").unwrap()).unwrap();
        assert_eq!(found.name(), "Mechanical Pencil");
    }

    #[test]
    fn arc_handle_satisfies_the_contract() {
        let repo = Arc::new(InMemoryProductRepository::new());
        repo.insert(product("7", "Pencil"));

        let shared: Arc<dyn ProductRepository> = repo;
        assert!(shared.find_by_id(&ProductId::new("7").unwrap()).is_ok());
    }
}
