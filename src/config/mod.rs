mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

/// Environment variable holding the upstream credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from_path(&config_path).await?;

    apply_api_key(&mut config, env::var(API_KEY_ENV).ok());

    Ok(config)
}

/// A key from the environment wins over the one in the file.
pub fn apply_api_key(config: &mut Config, api_key: Option<String>) {
    if let Some(api_key) = api_key {
        debug!("Using API key from {}", API_KEY_ENV);
        config.llm.api_key = api_key;
    }
}

/// Reads a YAML config file. A missing file is not an error: every field has
/// a default and the credential usually comes from the environment.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
