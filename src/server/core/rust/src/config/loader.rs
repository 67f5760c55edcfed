/* src/server/core/rust/src/config/loader.rs */

use std::path::Path;

use anyhow::{Context, Result};

use super::types::IntegrationConfig;

pub fn parse_config(content: &str) -> Result<IntegrationConfig> {
  let config: IntegrationConfig = toml::from_str(content).context("failed to parse config")?;
  config.validate()?;
  Ok(config)
}

pub fn load_config(path: &Path) -> Result<IntegrationConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config =
    parse_config(&content).with_context(|| format!("invalid config {}", path.display()))?;
  tracing::debug!(path = %path.display(), "loaded integration config");
  Ok(config)
}
