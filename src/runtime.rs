//! Runtime state built once by the pre-execution hook and read by every command.

use crate::cli::GlobalFlags;
use crate::config::{ConfigResolver, Configuration};
use crate::error::CliError;
use crate::logging::Logger;
use crate::output::{HelpPolicy, Output};
use tracing::{info, warn};

/// Message shown when help is requested in a non-text format.
pub const HELP_UNAVAILABLE: &str = "Invalid call: help is only available in text mode";

/// Resolved configuration, active output and debug flag for one run
#[derive(Debug)]
pub struct RuntimeState {
    config: Configuration,
    output: Output,
    debug: bool,
    help: HelpPolicy,
}

impl RuntimeState {
    /// Run the pre-execution hook: resolve configuration, then select the formatter.
    ///
    /// Returns before any command runs when defaults cannot be built or the
    /// requested format is unknown.
    pub fn initialize(
        flags: &GlobalFlags,
        resolver: &ConfigResolver,
        logger: &Logger,
    ) -> Result<Self, CliError> {
        logger.scope(|| -> Result<Self, CliError> {
            info!(
                version = env!("CARGO_PKG_VERSION"),
                debug = flags.debug,
                "Starting root command preparation"
            );

            let config = resolver.resolve(flags.config_file.as_deref())?;
            let output = Output::select(&flags.format, flags.debug)?;
            info!(format = %output.kind(), "Formatter set");

            Ok(Self::new(config, output, flags.debug))
        })
    }

    pub fn new(config: Configuration, output: Output, debug: bool) -> Self {
        let help = output.help_policy();
        Self {
            config,
            output,
            debug,
            help,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn help_policy(&self) -> HelpPolicy {
        self.help
    }

    /// Gate a help request on the active format.
    ///
    /// `show` runs only when help is allowed. Otherwise nothing is shown and the
    /// call fails with [`CliError::HelpUnavailable`].
    pub fn help<F>(&self, show: F) -> Result<(), CliError>
    where
        F: FnOnce() -> Result<(), CliError>,
    {
        match self.help {
            HelpPolicy::Allowed => show(),
            HelpPolicy::Forbidden => {
                warn!(format = %self.output.kind(), "{}", HELP_UNAVAILABLE);
                Err(CliError::HelpUnavailable)
            }
        }
    }
}
