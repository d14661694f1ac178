//! Configuration management for the Carflix client
//!
//! Handles config file loading and server address resolution.
//! Config is read from ~/.config/carflix/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default server address, matching the backend's default bind
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Carflix server base URL
    pub server: Option<String>,
    /// Preferred local player ("mpv" or "vlc")
    pub player: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/carflix/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("carflix").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Resolve the server base URL with fallback chain:
    /// 1. Explicit flag value (--server)
    /// 2. Environment variable CARFLIX_SERVER
    /// 3. Config file entry
    /// 4. Built-in default
    pub fn resolve_server(&self, flag: Option<&str>) -> String {
        if let Some(server) = flag {
            return server.to_string();
        }
        if let Ok(server) = std::env::var("CARFLIX_SERVER") {
            if !server.is_empty() {
                return server;
            }
        }
        self.server
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }
}
