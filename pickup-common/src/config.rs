//! State file location resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming the state file path
pub const STATE_FILE_ENV: &str = "PICKUP_STATE_FILE";

/// State file resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (`PICKUP_STATE_FILE`)
/// 3. `state_file` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_state_file(cli_arg: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(STATE_FILE_ENV) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = load_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(state_file) = config.get("state_file").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(state_file));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_state_file())
}

/// Get default configuration file path for the platform
fn load_config_file() -> Result<PathBuf> {
    let config_path = if cfg!(target_os = "linux") {
        // Try ~/.config/pickup/config.toml first, then /etc/pickup/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("pickup").join("config.toml"));
        let system_config = PathBuf::from("/etc/pickup/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    } else if cfg!(target_os = "macos") || cfg!(target_os = "windows") {
        dirs::config_dir()
            .map(|d| d.join("pickup").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?
    } else {
        return Err(Error::Config("Unsupported platform".to_string()));
    };

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// Get OS-dependent default state file path
fn default_state_file() -> PathBuf {
    let data_dir = if cfg!(target_os = "linux") {
        // ~/.local/share/pickup
        dirs::data_local_dir()
            .map(|d| d.join("pickup"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/pickup"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/pickup
        dirs::data_dir()
            .map(|d| d.join("pickup"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/pickup"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\pickup
        dirs::data_local_dir()
            .map(|d| d.join("pickup"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\pickup"))
    } else {
        PathBuf::from("./pickup_data")
    };

    data_dir.join("session.json")
}
