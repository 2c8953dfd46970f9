//! Router assembly and shared request plumbing.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;

use storefront_catalog::ProductRepository;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the application router.
///
/// The repository is passed in explicitly; the binary wires the dev
/// in-memory implementation and tests inject stubs.
pub fn build_app(config: &ApiConfig, repository: Arc<dyn ProductRepository>) -> Router {
    let services = Arc::new(AppServices::new(repository, config.lookup_timeout));

    let catalog = routes::catalog::router().layer(Extension(services));

    Router::new()
        .route("/health", get(health))
        // `nest` strips the prefix, so the inner `/` route only matches
        // `/<prefix>`; the trailing-slash shape must be mounted explicitly.
        .route(
            &format!("/{}/", config.route_prefix),
            get(routes::catalog::missing_identifier),
        )
        .nest(&format!("/{}", config.route_prefix), catalog)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(crate::middleware::request_span_middleware)),
        )
}

async fn health() -> StatusCode {
    StatusCode::OK
}
