//! Configuration management

use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the reporting backend `/api` calls are forwarded to
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Parsed backend URL; only http(s) is accepted
    pub fn backend(&self) -> Result<url::Url> {
        let url = url::Url::parse(&self.backend_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("backend_url must be http or https, got {}", self.backend_url);
        }
        Ok(url)
    }
}

/// Load from the platform config dir (`config.toml`, `config.json`, ...)
/// and `REPORTER_*` environment variables.
pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "logicmedia", "binom-reporter")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    load_config_from(&config_dir.join("config"))
}

/// Same as [`load_config`] with an explicit file stem.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("backend_url", DEFAULT_BACKEND_URL)?
        .set_default("request_timeout_secs", default_request_timeout_secs())?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&path.to_string_lossy()).required(false))
        // Override with environment variables (REPORTER_BACKEND_URL, ...)
        .add_source(
            ::config::Environment::with_prefix("REPORTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;
    config.backend()?;
    Ok(config)
}
