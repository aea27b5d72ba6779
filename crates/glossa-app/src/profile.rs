use std::fs;
use std::path::Path;

use anyhow::Context;
use glossa_config::Config;

/// Build the config: defaults, then the optional JSON file, then `GLOSSA_*`
/// environment variables.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str::<Config>(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    Ok(config.with_env_overrides())
}
