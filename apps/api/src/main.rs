mod config;
mod errors;
mod favorites;
mod generation;
mod llm_client;
mod routes;
mod showcase;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::favorites::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::favorites::store::FavoritesStore;
use crate::generation::generator::NameGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Masthead API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url)?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    // Initialize favorites storage
    let storage: Arc<dyn KeyValueStore> = match &config.favorites_backend {
        StorageBackend::Memory => {
            warn!("Favorites are kept in memory and will be lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::File(dir) => {
            let store = FileStore::new(dir.clone());
            info!("Favorites stored under {}", store.root().display());
            Arc::new(store)
        }
    };

    // Build app state
    let state = AppState {
        generator: NameGenerator::new(Arc::new(llm)),
        favorites: FavoritesStore::new(storage),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
