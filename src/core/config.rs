//! Configuration: provider endpoint, model, and API key resolution.
//!
//! The key comes from `OPENROUTER_API_KEY`, falling back to the stored key
//! file in the config directory. Cleaning text never needs a config; only
//! the rewrite path calls `load`.

use std::env;

use crate::core::api_key;

/// Default model used for rewrites when `OPENROUTER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "anthropic/claude-haiku-4.5";

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub model_id: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(
                f,
                "OPENROUTER_API_KEY is not set and no stored key was found (run `set-key`)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from the environment, falling back to the stored key
/// file for the credential. Returns an error if no API key can be found.
pub fn load() -> Result<Config, ConfigError> {
    let base_url =
        env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let api_key = env::var("OPENROUTER_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .or_else(api_key::load_api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let model_id = env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    Ok(Config {
        base_url,
        api_key,
        model_id,
    })
}
