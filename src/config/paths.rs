//! Built-in defaults: base directories and the configuration they imply.

use super::ide::IdeBundle;
use super::{BoardManagerConfig, Configuration, ProxyManualConfig, ProxyType};
use super::DEFAULT_CONFIG_FILE_NAME;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Inputs of the defaults layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    home: PathBuf,
    working_dir: PathBuf,
    ide: Option<IdeBundle>,
}

impl Defaults {
    /// Detect base directories and IDE bundling for the running process.
    ///
    /// Fails when the home or working directory cannot be determined; that is the
    /// only fatal condition of configuration resolution.
    pub fn detect() -> Result<Self, ConfigError> {
        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Defaults("cannot determine home directory".to_string()))?;
        let working_dir = std::env::current_dir().map_err(|e| {
            ConfigError::Defaults(format!("cannot determine working directory: {}", e))
        })?;

        let ide = match std::env::current_exe() {
            Ok(executable) => IdeBundle::detect(&executable),
            Err(e) => {
                tracing::debug!(error = %e, "Cannot locate executable, assuming standalone");
                None
            }
        };

        Ok(Self {
            home,
            working_dir,
            ide,
        })
    }

    /// Defaults rooted at explicit directories, not bundled in an IDE.
    pub fn from_dirs(home: PathBuf, working_dir: PathBuf) -> Self {
        Self {
            home,
            working_dir,
            ide: None,
        }
    }

    pub fn with_ide(mut self, ide: Option<IdeBundle>) -> Self {
        self.ide = ide;
        self
    }

    /// Conventional YAML config location.
    pub fn config_file(&self) -> PathBuf {
        self.working_dir.join(DEFAULT_CONFIG_FILE_NAME)
    }

    /// Build the defaults layer.
    pub fn configuration(&self) -> Configuration {
        let (data_dir, sketchbook_dir) = match self.ide.as_ref().and_then(IdeBundle::portable_dir) {
            Some(portable) => (portable.clone(), portable.join("sketchbook")),
            None => (default_data_dir(&self.home), default_sketchbook_dir(&self.home)),
        };

        Configuration {
            config_file: self.config_file(),
            ide: self.ide.clone(),
            downloads_dir: data_dir.join("staging"),
            data_dir,
            sketchbook_dir,
            proxy_type: ProxyType::Auto,
            proxy_manual_config: ProxyManualConfig::default(),
            board_manager: BoardManagerConfig::default(),
        }
    }
}

fn default_data_dir(home: &Path) -> PathBuf {
    if cfg!(target_os = "macos") {
        home.join("Library").join("Arduino15")
    } else if cfg!(windows) {
        home.join("AppData").join("Local").join("Arduino15")
    } else {
        home.join(".arduino15")
    }
}

fn default_sketchbook_dir(home: &Path) -> PathBuf {
    if cfg!(any(target_os = "macos", windows)) {
        home.join("Documents").join("Arduino")
    } else {
        home.join("Arduino")
    }
}
