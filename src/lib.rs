//! boardkit: configuration and output core for board tooling
//!
//! Resolves a layered configuration (defaults, YAML file, desktop IDE preferences,
//! environment) and reports command results through a single text or JSON output
//! selected once per run.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runtime;
