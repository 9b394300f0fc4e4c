//! User configuration (`config.toml`).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::display::{Locale, Messages};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Calculator settings. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language of the built-in error messages.
    pub locale: Locale,

    /// Copy every successful result to the clipboard.
    pub copy_on_evaluate: bool,

    /// Per-message overrides on top of the locale.
    pub messages: MessageOverrides,
}

/// The `[messages]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageOverrides {
    pub error: Option<String>,
    pub divide_by_zero: Option<String>,
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/simplecalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("simplecalc").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried, and a missing file there yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse a configuration from a string. `path` is used in errors only.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Resolve display messages, with `locale` overriding the configured one.
    pub fn messages(&self, locale: Option<Locale>) -> Messages {
        let mut messages = Messages::for_locale(locale.unwrap_or(self.locale));
        if let Some(error) = &self.messages.error {
            messages.error = error.clone();
        }
        if let Some(divide_by_zero) = &self.messages.divide_by_zero {
            messages.divide_by_zero = divide_by_zero.clone();
        }
        messages
    }
}
