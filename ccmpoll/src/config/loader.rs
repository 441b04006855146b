//! Configuration file loading

use super::schema::Config;
use crate::error::{Result, ToolError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Find user config by checking environment and standard locations
    pub fn find_user_config() -> Option<PathBuf> {
        // 1. $CCMPOLL_CONFIG
        if let Ok(path) = env::var("CCMPOLL_CONFIG") {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }

        // 2. $XDG_CONFIG_HOME/ccmpoll/config.toml
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            let p = PathBuf::from(xdg).join("ccmpoll/config.toml");
            if p.exists() {
                return Some(p);
            }
        }

        // 3. ~/.config/ccmpoll/config.toml
        if let Ok(home) = env::var("HOME") {
            let p = PathBuf::from(home).join(".config/ccmpoll/config.toml");
            if p.exists() {
                return Some(p);
            }
        }

        None
    }

    /// Load config from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ToolError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: explicit --config path > discovered user
    /// config > defaults. An explicit path that fails to load is an error;
    /// a missing discovered config silently falls back to defaults.
    pub fn load_or_default(explicit_config: Option<PathBuf>) -> Result<Config> {
        if let Some(path) = explicit_config {
            tracing::debug!("Loading explicit config from {:?}", path);
            return Self::load_from_file(path);
        }

        if let Some(path) = Self::find_user_config() {
            tracing::debug!("Loading user config from {:?}", path);
            return Self::load_from_file(path);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }
}
