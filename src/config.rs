//! `sygic-url` configuration.
//!
//! Loaded from `~/.sygic-url/config.toml` unless a path is given.
//! A missing default file is an empty config; a missing explicit file is an error.
//!
//! ```toml
//! back-button = "com.android.chrome"
//!
//! [truck-profiles.semi]
//! mxs = 90
//! len = 16500
//! rou = "tru"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::model::TruckSettings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no truck profile named '{0}'")]
    UnknownProfile(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Application identifier used by `back-button` when none is given.
    pub back_button: Option<String>,

    /// Named truck settings. Each profile keeps the key order written in the file.
    #[serde(default)]
    pub truck_profiles: BTreeMap<String, TruckSettings>,
}

impl Config {
    /// Load from `explicit`, or from the default path if it exists.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid config TOML.
    /// A missing default file is not an error; a missing explicit one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is not valid config TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            profiles = config.truck_profiles.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// The default config file path: `~/.sygic-url/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sygic-url").join("config.toml"))
    }

    /// Look up a named truck profile.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownProfile`] if no profile has that name.
    pub fn truck_profile(&self, name: &str) -> Result<&TruckSettings, ConfigError> {
        self.truck_profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }
}
