//! CLI output: error reporting and exit-code mapping at the process boundary.

use crate::error::CliError;
use crate::output::Output;
use std::io::Write;

/// Report `err` on stderr in the active format and return the exit code to use.
pub fn report_error(output: &Output, err: &CliError) -> i32 {
    output.print_error(&err.to_string());
    err.exit_code()
}

/// Same as [`report_error`], writing to `out`.
pub fn report_error_to(output: &Output, err: &CliError, out: &mut dyn Write) -> i32 {
    if let Err(write_err) = output.print_error_to(&err.to_string(), out) {
        tracing::error!(error = %write_err, "Failed to report error");
    }
    err.exit_code()
}
