//! Axum route handlers for the Favorites API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::favorites::models::FavoriteEntry;
use crate::favorites::storage::StorageError;
use crate::favorites::store::FavoritesStore;
use crate::generation::models::Suggestion;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteEntry>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub favorited: bool,
    /// Names stored after the toggle; drives the star state in the generator view.
    pub names: Vec<String>,
}

/// Runs a store operation off the async executor; the file store does blocking IO.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&FavoritesStore) -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.favorites.clone();
    let result = tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in favorites store: {e}"))
        })?;
    Ok(result?)
}

/// GET /api/favorites
pub async fn handle_list_favorites(
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favorites = with_store(&state, |store| store.load()).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

/// POST /api/favorites/toggle
///
/// Saves the suggestion, or un-saves it if a favorite with the same name exists.
/// The body must be a complete suggestion: non-empty name and description,
/// score in (0, 1], exactly three keywords.
pub async fn handle_toggle_favorite(
    State(state): State<AppState>,
    payload: Result<Json<Suggestion>, JsonRejection>,
) -> Result<Json<ToggleResponse>, AppError> {
    let Json(suggestion) = payload?;
    let issues = suggestion.validate();
    if !issues.is_empty() {
        return Err(AppError::Validation(issues));
    }

    let (favorited, names) = with_store(&state, move |store| {
        let favorited = store.toggle(&suggestion)?;
        Ok((favorited, store.names()?))
    })
    .await?;

    Ok(Json(ToggleResponse { favorited, names }))
}

/// DELETE /api/favorites/:name
pub async fn handle_remove_favorite(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favorites = with_store(&state, move |store| store.remove(&name)).await?;
    Ok(Json(FavoritesResponse { favorites }))
}

/// DELETE /api/favorites
pub async fn handle_clear_favorites(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    with_store(&state, |store| store.clear()).await?;
    Ok(StatusCode::NO_CONTENT)
}
