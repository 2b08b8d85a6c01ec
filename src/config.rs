//! Configuration System
//!
//! Layered configuration for every command. Sources are merged field by field in a
//! fixed order: built-in defaults, the YAML config file, IDE preferences (only when
//! running bundled inside the desktop IDE) and finally `BOARDKIT_*` environment
//! variables. Only the defaults layer is mandatory; every other layer degrades to the
//! previous result when it is missing or malformed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod ide;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigResolver;
pub use ide::{IdeBundle, IdePreferences};
pub use paths::Defaults;
pub use sources::environment::ENV_PREFIX;

/// File name of the conventional YAML config, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".cli-config.yml";

/// Resolved configuration shared by all commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// YAML source this configuration was resolved against
    #[serde(skip)]
    pub config_file: PathBuf,

    /// Desktop IDE installation hosting this executable, if any
    #[serde(skip)]
    pub ide: Option<IdeBundle>,

    /// Data directory holding package indexes and installed cores
    #[serde(rename = "arduino_data")]
    pub data_dir: PathBuf,

    /// Sketchbook directory
    #[serde(rename = "sketchbook_path")]
    pub sketchbook_dir: PathBuf,

    /// Staging directory for downloads
    #[serde(rename = "arduino_downloads_dir")]
    pub downloads_dir: PathBuf,

    #[serde(default)]
    pub proxy_type: ProxyType,

    #[serde(default)]
    pub proxy_manual_config: ProxyManualConfig,

    #[serde(default)]
    pub board_manager: BoardManagerConfig,
}

/// How network requests pick a proxy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    #[default]
    Auto,
    Manual,
    None,
}

impl ProxyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyType::Auto => "auto",
            ProxyType::Manual => "manual",
            ProxyType::None => "none",
        }
    }
}

/// Proxy settings used when `proxy_type` is `manual`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyManualConfig {
    pub hostname: String,
    pub username: String,
    pub password: String,
}

/// Board manager settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardManagerConfig {
    /// Package index URLs consulted in addition to the official one
    pub additional_urls: Vec<String>,
}

impl Configuration {
    /// True when the executable runs from inside a desktop IDE installation.
    pub fn is_bundled_in_ide(&self) -> bool {
        self.ide.is_some()
    }

    /// Path of the IDE preferences file for this configuration's data directory.
    pub fn ide_preferences_path(&self) -> PathBuf {
        self.data_dir.join(ide::PREFERENCES_FILE_NAME)
    }

    /// Serialize the layered fields as a YAML document.
    pub fn to_yaml(&self) -> Result<String, crate::error::ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the layered fields as YAML to `path`, creating parent directories.
    pub fn save_as(&self, path: &Path) -> Result<(), crate::error::ConfigError> {
        let content = self.to_yaml()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| crate::error::ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| crate::error::ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
