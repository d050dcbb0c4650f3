//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ToolsConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Config file picked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sandigital.toml";

/// Environment variable overriding `inspector.blockchain.rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "SANDIGITAL_RPC_URL";
/// Environment variable overriding `inspector.contract_address`.
pub const CONTRACT_ADDRESS_ENV_VAR: &str = "SANDIGITAL_CONTRACT_ADDRESS";
/// Environment variable overriding `inspector.user_address`.
pub const USER_ADDRESS_ENV_VAR: &str = "SANDIGITAL_USER_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// Reads the file (see [`read_config_file`]), applies `SANDIGITAL_*`
/// overrides from the process environment, then validates the shared
/// sections. The `[inspector]` section is validated by the inspector itself.
pub fn load_config(path: Option<&Path>) -> Result<ToolsConfig, ConfigError> {
    let mut config = read_config_file(path)?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse the config file without environment overrides or validation.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// read when present and defaults are used otherwise.
pub fn read_config_file(path: Option<&Path>) -> Result<ToolsConfig, ConfigError> {
    match path {
        Some(path) => parse_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                parse_file(default_path)
            } else {
                tracing::debug!("No config file found, using defaults");
                Ok(ToolsConfig::default())
            }
        }
    }
}

fn parse_file(path: &Path) -> Result<ToolsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Config file loaded");
    Ok(config)
}

/// Apply `SANDIGITAL_*` overrides using the given variable lookup.
pub fn apply_env_overrides<F>(config: &mut ToolsConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(RPC_URL_ENV_VAR) {
        config.inspector.blockchain.rpc_url = url;
    }
    if let Some(address) = lookup(CONTRACT_ADDRESS_ENV_VAR) {
        config.inspector.contract_address = address;
    }
    if let Some(address) = lookup(USER_ADDRESS_ENV_VAR) {
        config.inspector.user_address = address;
    }
}
