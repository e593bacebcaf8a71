//! Server configuration.
//!
//! Loaded from a YAML file (`config.yaml`, or the path in `WEBSERVER_CONFIG`).
//! Every field has a default, so a missing file or a partial file is fine.
//! `LISTEN` overrides `server.listen_addr`.
//!
//! ```yaml
//! server:
//!   listen_addr: "127.0.0.1:8080"
//!   max_request_size: 1048576
//! static_files:
//!   roots: ["./templates", "./static"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on request head plus body, in bytes
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_request_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directories searched in order for static content
    pub roots: Vec<PathBuf>,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("./templates"), PathBuf::from("./static")],
        }
    }
}

impl Config {
    /// Loads the config file and applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("WEBSERVER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = Self::from_file(Path::new(&path))?;
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    /// Reads a YAML config file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
