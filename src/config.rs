use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENGINE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SCRIPT_EXTENSION: &str = "smia";
pub const ENGINE_URL_ENV: &str = "SMIA_ENGINE_URL";

const DEFAULT_CONFIG_FILE: &str = "smia.json";

fn default_engine_url() -> String {
    DEFAULT_ENGINE_URL.to_string()
}

fn default_script_extension() -> String {
    DEFAULT_SCRIPT_EXTENSION.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_script_extension")]
    pub script_extension: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            engine_url: default_engine_url(),
            request_timeout_secs: None,
            script_extension: default_script_extension(),
        }
    }
}

impl ClientConfig {
    /// Read the config file (explicit path, else `./smia.json` if present)
    /// and apply the `SMIA_ENGINE_URL` override.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: Option<PathBuf> = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                p.is_file().then_some(p)
            }
        };

        let mut cfg = match path {
            Some(p) => Self::read(&p)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(ENGINE_URL_ENV)
            && !url.trim().is_empty()
        {
            cfg.engine_url = url;
        }
        cfg.normalize();
        Ok(cfg)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let mut cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.normalize();
        Ok(cfg)
    }

    pub fn with_engine_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.engine_url = url;
            self.normalize();
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn normalize(&mut self) {
        let trimmed = self.engine_url.trim().trim_end_matches('/');
        self.engine_url = trimmed.to_string();
        let ext = self.script_extension.trim().trim_start_matches('.');
        self.script_extension = ext.to_string();
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
