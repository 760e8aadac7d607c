mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the file named by `CONFIG_PATH` (default `config.yaml`).
///
/// The `LLM_API_KEY` environment variable, when set, overrides `llm.api_key` so the
/// credential can live in secret storage instead of the config file. An empty key is
/// not an error here; the server rejects it when the provider client is built, and
/// the console binary prompts for it interactively.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    if let Ok(key) = env::var("LLM_API_KEY") {
        config.llm.api_key = key;
    }

    Ok(config)
}
