use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8008;
pub const DEFAULT_DOCUMENT_ROOT: &str = "./public";

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "TINYWEB_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    /// Extra extension to MIME type mappings on top of the built-in table.
    pub content_types: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("127.0.0.1:{DEFAULT_PORT}"),
            document_root: PathBuf::from(DEFAULT_DOCUMENT_ROOT),
            content_types: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `TINYWEB_CONFIG` may point to a YAML file; `LISTEN` and
    /// `DOCUMENT_ROOT` override whatever the file or defaults say.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(listen_addr) = lookup("LISTEN") {
            cfg.listen_addr = listen_addr;
        }
        if let Some(root) = lookup("DOCUMENT_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses YAML; absent keys keep their defaults.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
