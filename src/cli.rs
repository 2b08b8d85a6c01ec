//! CLI domain: parse, route, help, output, and presentation only.
//! Commands receive the runtime state built by the pre-execution hook; a single
//! route table dispatches them.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, render_help};
pub use output::{report_error, report_error_to};
pub use parse::{Cli, Commands, ConfigCommands, GlobalFlags};
pub use presentation::{ConfigDump, ConfigWritten, VersionInfo};
pub use route::RunContext;
