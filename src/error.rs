//! Error types for the boardkit configuration and output core.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes shared by every command.
pub struct ExitCode;

impl ExitCode {
    pub const SUCCESS: i32 = 0;
    pub const GENERIC: i32 = 1;
    pub const BAD_CALL: i32 = 3;
}

/// Configuration resolution errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot build default configuration: {0}")]
    Defaults(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid IDE preferences at {path}: {reason}")]
    Preferences { path: PathBuf, reason: String },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Value-level formatting errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// Raised only when the JSON formatter reports mismatches (debug mode).
    /// `rendered` holds the text form of the rejected value.
    #[error("only record and mapping values are accepted (got: {rendered})")]
    NotARecord { rendered: String },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Output write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Formatter selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputError {
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),
}

/// Errors surfaced by the CLI layer; each maps to a process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidFormat(#[from] OutputError),

    #[error("Invalid call: help is only available in text mode")]
    HelpUnavailable,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidFormat(_) | CliError::HelpUnavailable => ExitCode::BAD_CALL,
            CliError::Config(_) | CliError::Format(_) | CliError::Io(_) => ExitCode::GENERIC,
        }
    }
}
