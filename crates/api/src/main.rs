use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;

use storefront_api::config::ApiConfig;
use storefront_catalog::{InMemoryProductRepository, Product, ProductRepository};
use storefront_core::ProductId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ApiConfig::from_env()?;

    // Dev wiring: seeded in-memory repository. Deployments supply their own
    // ProductRepository implementation against the real catalog store.
    let repository = Arc::new(InMemoryProductRepository::new());
    seed_demo_catalog(&repository)?;

    let repository: Arc<dyn ProductRepository> = repository;
    let app = storefront_api::app::build_app(&config, repository);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        "listening on {} (route prefix: /{})",
        listener.local_addr()?,
        config.route_prefix
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn seed_demo_catalog(repository: &InMemoryProductRepository) -> anyhow::Result<()> {
    let mut pencil_attributes = BTreeMap::new();
    pencil_attributes.insert("grade".to_string(), serde_json::json!("HB"));

    repository.insert(Product::with_attributes(
        ProductId::new("7")?,
        "Pencil",
        pencil_attributes,
    )?);
    repository.insert(Product::new(ProductId::new("8")?, "Notebook")?);

    tracing::info!(products = repository.len(), "seeded demo catalog");
    Ok(())
}
