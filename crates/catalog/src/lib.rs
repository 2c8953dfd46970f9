//! `storefront-catalog` — the catalog domain.
//!
//! Holds the immutable [`Product`] entity and the [`ProductRepository`]
//! contract the lookup surface consumes. Storage technology is a
//! collaborator's concern; only an in-memory implementation for dev/test
//! wiring lives here.

pub mod product;
pub mod repository;

pub use product::Product;
pub use repository::{InMemoryProductRepository, ProductRepository, RepositoryError};
