use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower::ServiceBuilder;

use avalans_infra::{InMemoryTableStore, TableItemRepository, TableLocationRepository, TableStore};
use avalans_items::ItemRepository;
use avalans_locations::LocationRepository;

use crate::config::ServiceConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::{ItemServices, LocationServices};

/// Router of the items service over the given repository.
pub fn items_app(repository: Arc<dyn ItemRepository>) -> Router {
    let services = Arc::new(ItemServices::new(repository));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/items", routes::items::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}

/// Router of the locations service over the given repository.
pub fn locations_app(repository: Arc<dyn LocationRepository>) -> Router {
    let services = Arc::new(LocationServices::new(repository));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/locations", routes::locations::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}

/// Items service backed by an in-memory table store.
pub async fn build_items_app() -> anyhow::Result<Router> {
    let store: Arc<dyn TableStore> = Arc::new(InMemoryTableStore::new());
    let repository = TableItemRepository::new(store).await?;
    Ok(items_app(Arc::new(repository)))
}

/// Locations service backed by an in-memory table store.
pub async fn build_locations_app() -> anyhow::Result<Router> {
    let store: Arc<dyn TableStore> = Arc::new(InMemoryTableStore::new());
    let repository = TableLocationRepository::new(store).await?;
    Ok(locations_app(Arc::new(repository)))
}

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(service: &str, config: &ServiceConfig, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!(service, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
