//! Itemdeck Server - HTTP access to a large in-memory item collection.
//!
//! This server exposes the itemdeck-engine operations (search, sort,
//! pagination, bulk selection, reorder and reset) as JSON endpoints.

mod config;
mod error;
mod handlers;
mod routes;

use crate::config::Config;
use itemdeck_engine::{ItemService, ItemStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: ItemService,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "itemdeck_server=debug,itemdeck_engine=info,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Itemdeck Server on {}:{}", config.host, config.port);

    // Generate the collection
    tracing::info!("Generating {} items...", config.item_count);
    let item_count = config.item_count;
    let store = tokio::task::spawn_blocking(move || ItemStore::with_items(item_count)).await?;

    // Build application state
    let state = AppState {
        service: ItemService::new(Arc::new(store)),
    };

    // Build router
    let app = routes::create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
