//! Desktop IDE integration: bundle detection and the IDE's `preferences.txt`.

use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub(crate) const PREFERENCES_FILE_NAME: &str = "preferences.txt";

/// Directories an IDE installation ships next to the bundled executable.
const IDE_MARKER_DIRS: [&str; 2] = ["lib", "examples"];

/// A desktop IDE installation that hosts this executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeBundle {
    dir: PathBuf,
    portable: Option<PathBuf>,
}

impl IdeBundle {
    /// Detect whether `executable` lives inside an IDE installation.
    ///
    /// Symlinks are followed first, so a linked CLI still resolves to the install
    /// directory it was shipped in.
    pub fn detect(executable: &Path) -> Option<Self> {
        let executable = dunce::canonicalize(executable).unwrap_or_else(|_| executable.to_path_buf());
        let dir = executable.parent()?;

        if !IDE_MARKER_DIRS.iter().all(|name| dir.join(name).is_dir()) {
            return None;
        }

        let portable = dir.join("portable");
        Some(Self {
            dir: dir.to_path_buf(),
            portable: portable.is_dir().then_some(portable),
        })
    }

    /// Installation directory holding the executable.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Portable data directory, when the installation carries one.
    pub fn portable_dir(&self) -> Option<&PathBuf> {
        self.portable.as_ref()
    }
}

/// Parsed `key=value` preferences written by the desktop IDE
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdePreferences {
    entries: BTreeMap<String, String>,
}

impl IdePreferences {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|reason| ConfigError::Preferences {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse properties text. Blank lines and `#`/`!` comments are skipped.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut entries = BTreeMap::new();
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| format!("line {}: expected key=value", index + 1))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(format!("line {}: empty key", index + 1));
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
