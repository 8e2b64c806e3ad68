// src/core/config/loader.rs
use crate::core::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE: &str = "mrt.toml";

/// Loads project defaults from an `mrt.toml` file starting from the given
/// directory and recursively checking parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `mrt.toml`
///
/// # Returns
///
/// * `Ok(Config)` - The parsed file with `base` set to its directory, or an
///   empty `Config` if none was found
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined for a relative `dir`
/// * The `mrt.toml` file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            debug!(path = %config_file.display(), "Loaded config");
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
            config.base = Some(current_dir);
            return Ok(config);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
