pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::favorites::handlers as favorites;
use crate::generation::handlers as generation;
use crate::showcase;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(generation::handle_generate))
        .route(
            "/api/favorites",
            get(favorites::handle_list_favorites).delete(favorites::handle_clear_favorites),
        )
        .route(
            "/api/favorites/toggle",
            post(favorites::handle_toggle_favorite),
        )
        .route(
            "/api/favorites/:name",
            delete(favorites::handle_remove_favorite),
        )
        .route("/api/examples", get(showcase::handle_list_examples))
        .with_state(state)
}
