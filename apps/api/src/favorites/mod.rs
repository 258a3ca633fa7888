// Favorites: saved suggestions persisted through a swappable key-value store.

pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
