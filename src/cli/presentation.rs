//! CLI presentation: records printed by the consumer commands.
//!
//! Each record carries its text rendering; the JSON formatter serializes the fields.

use crate::config::Configuration;
use crate::error::ConfigError;
use crate::output::Record;
use serde::Serialize;
use std::path::PathBuf;

pub const APPLICATION_NAME: &str = "boardkit";

/// Output of `version`
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub application: String,
    pub version: String,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            application: APPLICATION_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Record for VersionInfo {
    fn to_text(&self) -> String {
        format!("{} version {}", self.application, self.version)
    }
}

/// Output of `config dump`: the resolved configuration, shown as YAML in text mode
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDump {
    #[serde(flatten)]
    config: Configuration,
    #[serde(skip)]
    yaml: String,
}

impl ConfigDump {
    pub fn new(config: &Configuration) -> Result<Self, ConfigError> {
        Ok(Self {
            yaml: config.to_yaml()?,
            config: config.clone(),
        })
    }
}

impl Record for ConfigDump {
    fn to_text(&self) -> String {
        self.yaml.trim_end().to_string()
    }
}

/// Output of `config init`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigWritten {
    pub path: PathBuf,
}

impl Record for ConfigWritten {
    fn to_text(&self) -> String {
        format!("Config file written: {}", self.path.display())
    }
}
