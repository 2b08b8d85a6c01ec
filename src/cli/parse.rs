//! CLI parse: clap types for boardkit. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// boardkit - configuration and output core for board tooling
#[derive(Parser, Debug, Clone)]
#[command(name = "boardkit")]
#[command(about = "Board tooling command line: layered configuration and text/JSON output")]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalFlags {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    pub format: String,

    /// YAML configuration file (default: .cli-config.yml in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print help (text format only)
    #[arg(short = 'h', long, global = true)]
    pub help: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show version information
    #[command(disable_help_flag = true)]
    Version,
    /// Configuration commands (dump, init)
    #[command(disable_help_flag = true, disable_help_subcommand = true)]
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    #[command(disable_help_flag = true)]
    Dump,
    /// Write the configuration to a YAML file
    #[command(disable_help_flag = true)]
    Init {
        /// Destination file (default: the resolved config file path)
        #[arg(long, value_name = "PATH")]
        save_as: Option<PathBuf>,

        /// Write built-in defaults instead of the resolved configuration
        #[arg(long)]
        default: bool,
    },
}
