mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config = parse(&config_str)?;

    if let Ok(api_key) = env::var("LLM_API_KEY") {
        debug!("Using LLM API key from LLM_API_KEY");
        config.llm.api_key = api_key;
    }

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;

    if config.llm.model.trim().is_empty() {
        return Err(crate::Error::config("llm.model must not be empty"));
    }

    Ok(config)
}
