//! boardkit CLI Binary
//!
//! Parses global flags, runs the pre-execution hook and dispatches the command.

use boardkit::cli::{report_error, Cli, RunContext};
use boardkit::config::ConfigResolver;
use boardkit::logging::Logger;
use boardkit::output::Output;
use boardkit::runtime::RuntimeState;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logger = Logger::new(cli.global.debug);
    let _log_guard = logger.install();

    let resolver = ConfigResolver::new();
    let state = match RuntimeState::initialize(&cli.global, &resolver, &logger) {
        Ok(state) => state,
        Err(e) => {
            error!("Pre-execution hook failed: {}", e);
            let output = Output::select(&cli.global.format, cli.global.debug)
                .unwrap_or_else(|_| Output::text());
            process::exit(report_error(&output, &e));
        }
    };

    let context = RunContext::new(state, resolver);
    match context.execute(&cli) {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(report_error(context.state().output(), &e));
        }
    }
}
