use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub favorites_backend: StorageBackend,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            favorites_backend: StorageBackend::from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Where favorites live. `FAVORITES_STORE=memory` keeps them for the process
/// lifetime only; the default writes JSON files under `DATA_DIR`.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
}

impl StorageBackend {
    fn from_env() -> Result<Self> {
        let kind = std::env::var("FAVORITES_STORE").unwrap_or_else(|_| "file".to_string());
        match kind.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File(
                std::env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./data")),
            )),
            other => anyhow::bail!("FAVORITES_STORE must be 'file' or 'memory', got '{other}'"),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing_names_the_variable() {
        let err = require_env("MASTHEAD_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("MASTHEAD_TEST_SURELY_UNSET_VAR"));
    }

    #[test]
    fn test_require_env_rejects_blank_value() {
        std::env::set_var("MASTHEAD_TEST_BLANK_VAR", "   ");
        let err = require_env("MASTHEAD_TEST_BLANK_VAR").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_require_env_returns_value() {
        std::env::set_var("MASTHEAD_TEST_SET_VAR", "sk-test");
        assert_eq!(require_env("MASTHEAD_TEST_SET_VAR").unwrap(), "sk-test");
    }
}
