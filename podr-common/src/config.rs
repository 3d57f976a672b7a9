//! Configuration loading and backend URL resolution

use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Default episode source backend (local json-server style API)
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3333";

/// Backend URL resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`backend_url` key)
/// 4. Compiled default (fallback)
pub fn resolve_backend_url(cli_arg: Option<&str>, env_var_name: &str) -> String {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        return url.to_string();
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(env_var_name) {
        if !url.is_empty() {
            return url;
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(url) = config.get("backend_url").and_then(|v| v.as_str()) {
                    return url.to_string();
                }
            }
        }
    }

    // Priority 4: Compiled default
    debug!("No backend URL configured, using {}", DEFAULT_BACKEND_URL);
    DEFAULT_BACKEND_URL.to_string()
}

/// Locate the configuration file for the platform
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir()
        .map(|d| d.join("podr").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if user_config.exists() {
        return Ok(user_config);
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/podr/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config(format!(
        "Config file not found: {:?}",
        user_config
    )))
}
