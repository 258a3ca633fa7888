use crate::favorites::store::FavoritesStore;
use crate::generation::generator::NameGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation service; holds the chat model behind `Arc<dyn ChatModel>`.
    pub generator: NameGenerator,
    /// Favorites over the configured key-value store.
    pub favorites: FavoritesStore,
}
