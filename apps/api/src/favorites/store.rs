//! Favorites store: the saved-name list kept under a single storage key.
//!
//! Every mutation is a full read-modify-write of the JSON array. Two
//! concurrent toggles are two independent cycles and the last writer wins.

use std::sync::Arc;

use tracing::info;

use crate::favorites::models::FavoriteEntry;
use crate::favorites::storage::{KeyValueStore, StorageError};
use crate::generation::models::Suggestion;

/// Storage key holding the JSON-encoded favorites array.
pub const FAVORITES_KEY: &str = "newsletter-favorites";

#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// All favorites in insertion order; empty when nothing was ever saved.
    pub fn load(&self) -> Result<Vec<FavoriteEntry>, StorageError> {
        match self.storage.get(FAVORITES_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, favorites: &[FavoriteEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }

    /// Removes the suggestion if a favorite with its name exists, otherwise
    /// appends it with a fresh timestamp. Returns whether it is now a favorite.
    pub fn toggle(&self, suggestion: &Suggestion) -> Result<bool, StorageError> {
        let mut favorites = self.load()?;
        let before = favorites.len();
        favorites.retain(|f| !f.has_name(&suggestion.name));

        let favorited = favorites.len() == before;
        if favorited {
            favorites.push(FavoriteEntry::new(suggestion.clone()));
            info!("Added favorite {:?}", suggestion.name);
        } else {
            info!("Removed favorite {:?}", suggestion.name);
        }

        self.save(&favorites)?;
        Ok(favorited)
    }

    /// Drops the favorite with this name, keeping the others in order.
    /// Unknown names leave storage untouched.
    pub fn remove(&self, name: &str) -> Result<Vec<FavoriteEntry>, StorageError> {
        let mut favorites = self.load()?;
        let before = favorites.len();
        favorites.retain(|f| !f.has_name(name));

        if favorites.len() != before {
            self.save(&favorites)?;
            info!("Removed favorite {name:?}");
        }
        Ok(favorites)
    }

    /// Names of all favorites, in insertion order.
    pub fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .load()?
            .into_iter()
            .map(|f| f.name().to_string())
            .collect())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.delete(FAVORITES_KEY)
    }
}
