//! Configuration loading.
//!
//! Settings come from a TOML file (see [`Config::config_path`]). A missing
//! file means defaults; command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "CHECKLINE_CONFIG";

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// When to emit color escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a capable terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always color (on platforms that support it)
    Always,
    /// Never color
    Never,
}

/// checkline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces written before each checking message
    pub indent: usize,
    /// Color policy
    pub color: ColorChoice,
    /// Fixed terminal width; probed when absent
    pub columns: Option<usize>,
    /// Tag printed when a checked command succeeds
    pub ok_label: String,
    /// Tag printed when a checked command fails
    pub fail_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 2,
            color: ColorChoice::Auto,
            columns: None,
            ok_label: "OK".to_string(),
            fail_label: "FAILED".to_string(),
        }
    }
}

impl Config {
    /// Resolve the config file location.
    ///
    /// Priority: explicit path, then `$CHECKLINE_CONFIG`, then
    /// `<config dir>/checkline/config.toml`.
    pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("checkline").join("config.toml"))
    }

    /// Load the config from the resolved location, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::config_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
