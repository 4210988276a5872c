//! Announce configuration
//!
//! Load order (later wins):
//! 1. built-in defaults
//! 2. `~/.config/build-announce/config.json`
//! 3. environment: `ANNOUNCE_TYPE`, `ANNOUNCE_SNARL_HOST`, `ANNOUNCE_SNARL_PORT`, `ANNOUNCE_ICON_DIR`

use crate::announce::snp::SNARL_PORT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_TYPE: &str = "ANNOUNCE_TYPE";
pub const ENV_SNARL_HOST: &str = "ANNOUNCE_SNARL_HOST";
pub const ENV_SNARL_PORT: &str = "ANNOUNCE_SNARL_PORT";
pub const ENV_ICON_DIR: &str = "ANNOUNCE_ICON_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnounceConfig {
    /// Announcer type used when none is given on the command line
    pub default_type: String,
    /// Snarl host; loopback when unset
    pub snarl_host: Option<String>,
    pub snarl_port: u16,
    /// Directory holding notification icons
    pub icon_dir: Option<PathBuf>,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            default_type: "local".to_string(),
            snarl_host: None,
            snarl_port: SNARL_PORT,
            icon_dir: None,
        }
    }
}

impl AnnounceConfig {
    /// Default config file location
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("build-announce").join("config.json"))
    }

    /// Config file (if present) plus environment overrides
    pub fn auto_load() -> Result<Self> {
        let mut config = match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded announce config");
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(kind) = get(ENV_TYPE) {
            self.default_type = kind;
        }
        if let Some(host) = get(ENV_SNARL_HOST) {
            self.snarl_host = Some(host);
        }
        if let Some(port) = get(ENV_SNARL_PORT) {
            self.snarl_port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} is not a valid port: {}", ENV_SNARL_PORT, port))?;
        }
        if let Some(dir) = get(ENV_ICON_DIR) {
            self.icon_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }
}
