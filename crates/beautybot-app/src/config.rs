use anyhow::{Context, Result};
use beautybot_core::{ChatConfig, FailedTurnPolicy};
use std::fs;
use std::path::Path;

use crate::cli::Cli;

/// Resolve the session configuration: file, then command line overrides.
pub fn load_config(cli: &Cli) -> Result<ChatConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => ChatConfig::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    if let Some(path) = &cli.system_prompt_file {
        config.system_prompt = fs::read_to_string(path)
            .with_context(|| format!("Failed to read system prompt from {}", path.display()))?
            .trim()
            .to_string();
    }

    if cli.discard_failed_turns {
        config.failed_turns = FailedTurnPolicy::Discard;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a TOML config file; missing keys keep their defaults.
pub fn read_config_file(path: &Path) -> Result<ChatConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ChatConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
