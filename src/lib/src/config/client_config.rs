use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{API_URL_ENV, CLIENT_CONFIG_FILENAME, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::SchoolDeskError;
use crate::util;

/// Where the API lives and how long to wait for it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: String::from(DEFAULT_API_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl AsRef<str>) -> ClientConfig {
        ClientConfig {
            api_url: api_url.as_ref().to_string(),
            ..Default::default()
        }
    }

    pub fn default_path() -> Result<PathBuf, SchoolDeskError> {
        Ok(util::fs::schooldesk_config_dir()?.join(CLIENT_CONFIG_FILENAME))
    }

    /// Reads the config file at `path`, falling back to defaults when it is
    /// missing. `SCHOOLDESK_API_URL` overrides the stored url either way.
    pub fn load(path: &Path) -> Result<ClientConfig, SchoolDeskError> {
        let config = if path.exists() {
            log::debug!("reading client config from {:?}", path);
            let contents = util::fs::read_from_path(path)?;
            toml::from_str(&contents)?
        } else {
            log::debug!("no client config at {:?}, using defaults", path);
            ClientConfig::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn get() -> Result<ClientConfig, SchoolDeskError> {
        ClientConfig::load(&ClientConfig::default_path()?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SchoolDeskError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)
    }

    pub fn save_default(&self) -> Result<(), SchoolDeskError> {
        self.save(&ClientConfig::default_path()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn with_env_overrides(self) -> ClientConfig {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("{API_URL_ENV} overrides api_url with {url}");
                ClientConfig {
                    api_url: url,
                    ..self
                }
            }
            _ => self,
        }
    }
}
