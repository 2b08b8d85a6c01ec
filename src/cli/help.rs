//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{Cli, Commands, ConfigCommands};
use clap::CommandFactory;

/// Command name string for logs (e.g. "version", "config.dump").
pub fn command_name(command: Option<&Commands>) -> String {
    match command {
        None => "help".to_string(),
        Some(Commands::Version) => "version".to_string(),
        Some(Commands::Config { command }) => match command {
            Some(command) => format!("config.{}", config_command_name(command)),
            None => "config".to_string(),
        },
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Dump => "dump",
        ConfigCommands::Init { .. } => "init",
    }
}

/// Subcommand names leading to the command whose help is requested.
pub fn help_path(command: Option<&Commands>) -> Vec<&'static str> {
    match command {
        None => Vec::new(),
        Some(Commands::Version) => vec!["version"],
        Some(Commands::Config { command: None }) => vec!["config"],
        Some(Commands::Config {
            command: Some(command),
        }) => vec!["config", config_command_name(command)],
    }
}

/// Plain-text help for the command at `path`, with global flags included.
pub fn render_help(path: &[&str]) -> String {
    let mut target = Cli::command();
    target.build();
    for name in path {
        let next = target.find_subcommand(name).cloned();
        match next {
            Some(subcommand) => target = subcommand,
            None => break,
        }
    }
    target.render_help().to_string()
}
