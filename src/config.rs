//! Optional configuration file handling.
//!
//! `bnsearch` works with no configuration at all; a `config.toml` under
//! the platform config dir may override the datastore endpoint (useful
//! for mirrors or a local fixture server) and the request timeout.

use std::path::PathBuf;

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::constants;
use crate::error::Error;

/// Runtime configuration with defaults from [`constants`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Datastore SQL endpoint URL.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: constants::DATASTORE_ENDPOINT.to_string(),
            timeout_secs: constants::HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads the configuration file if present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file exists but cannot be
    /// read, parsed, or holds an invalid endpoint URL.
    pub fn load() -> Result<Self, Error> {
        match config_path() {
            Some(path) if path.is_file() => {
                debug!("loading configuration from {}", path.display());
                let raw = std::fs::read_to_string(&path)
                    .map_err(|err| Error::Config(format!("{}: {err}", path.display())))?;
                Self::from_toml(&raw)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parses and validates a TOML configuration document.
    pub fn from_toml(raw: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(raw).map_err(|err| Error::Config(err.to_string()))?;
        Url::parse(&config.endpoint)
            .map_err(|err| Error::Config(format!("endpoint {:?}: {err}", config.endpoint)))?;
        if config.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(config)
    }
}

/// Platform path of the optional configuration file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
