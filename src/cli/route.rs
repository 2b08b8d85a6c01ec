//! CLI route: single route table and run context. Dispatches parsed commands and
//! prints their records through the active output.

use crate::cli::help::{command_name, help_path, render_help};
use crate::cli::parse::{Cli, Commands, ConfigCommands};
use crate::cli::presentation::{ConfigDump, ConfigWritten, VersionInfo};
use crate::config::ConfigResolver;
use crate::error::CliError;
use crate::runtime::RuntimeState;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: the state built by the pre-execution hook and
/// the resolver it was built with.
pub struct RunContext {
    state: RuntimeState,
    resolver: ConfigResolver,
}

impl RunContext {
    pub fn new(state: RuntimeState, resolver: ConfigResolver) -> Self {
        Self { state, resolver }
    }

    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    /// Execute the parsed command, printing to stdout.
    pub fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(cli, &mut out)
    }

    pub fn execute_to(&self, cli: &Cli, out: &mut dyn Write) -> Result<(), CliError> {
        let command = cli.command.as_ref();
        info!(command = %command_name(command), "Executing command");

        if cli.global.help {
            return self.show_help(command, out);
        }

        match command {
            None => self.show_help(None, out),
            Some(Commands::Version) => {
                self.state.output().print_to(&VersionInfo::current(), out)?;
                Ok(())
            }
            Some(Commands::Config { command: None }) => self.show_help(command, out),
            Some(Commands::Config {
                command: Some(command),
            }) => self.handle_config_command(command, out),
        }
    }

    fn handle_config_command(
        &self,
        command: &ConfigCommands,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        match command {
            ConfigCommands::Dump => {
                let dump = ConfigDump::new(self.state.config())?;
                self.state.output().print_to(&dump, out)?;
                Ok(())
            }
            ConfigCommands::Init { save_as, default } => {
                let written = self.handle_config_init(save_as.as_deref(), *default)?;
                self.state.output().print_to(&written, out)?;
                Ok(())
            }
        }
    }

    fn handle_config_init(
        &self,
        save_as: Option<&Path>,
        default: bool,
    ) -> Result<ConfigWritten, CliError> {
        let path: PathBuf = save_as
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.state.config().config_file.clone());

        let config = if default {
            self.resolver.defaults()?.configuration()
        } else {
            self.state.config().clone()
        };

        debug!(path = %path.display(), default, "Writing config file");
        config.save_as(&path)?;
        info!(path = %path.display(), "Config file written");
        Ok(ConfigWritten { path })
    }

    fn show_help(&self, command: Option<&Commands>, out: &mut dyn Write) -> Result<(), CliError> {
        self.state.help(|| {
            let help = render_help(&help_path(command));
            write!(out, "{}", help)?;
            Ok(())
        })
    }
}
