//! Output System
//!
//! Every command reports through one [`Output`], chosen once from the `--format`
//! flag. The text formatter prints human-readable renderings; the JSON formatter
//! prints one compact document per record and treats every other value according
//! to its [`MismatchPolicy`].

use crate::error::{FormatError, OutputError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

mod json;
mod printable;
mod text;

pub use json::{JsonFormatter, MismatchPolicy};
pub use printable::{Framed, Printable, Record};
pub use text::TextFormatter;

/// Renders values for one output format.
pub trait Formatter {
    /// Render `value`. An empty string means there is nothing to print.
    fn format(&self, value: &dyn Printable) -> Result<String, FormatError>;

    /// Render `value` and write it to `out` followed by a newline.
    fn print(&self, value: &dyn Printable, out: &mut dyn Write) -> Result<(), FormatError> {
        let rendered = self.format(value)?;
        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }
        Ok(())
    }
}

/// Output formats selectable with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    Text,
    Json,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Text => "text",
            FormatterKind::Json => "json",
        }
    }
}

impl FromStr for FormatterKind {
    type Err = OutputError;

    /// Names are matched exactly; `JSON` or ` json` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FormatterKind::Text),
            "json" => Ok(FormatterKind::Json),
            other => Err(OutputError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether help text may be shown in the active format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpPolicy {
    Allowed,
    Forbidden,
}

/// The active formatter for the process.
pub struct Output {
    kind: FormatterKind,
    formatter: Box<dyn Formatter + Send + Sync>,
}

impl Output {
    /// Select a formatter by name. JSON mismatches are reported only when `debug` is set.
    pub fn select(name: &str, debug: bool) -> Result<Self, OutputError> {
        let kind = name.parse::<FormatterKind>()?;
        Ok(Self::new(kind, debug))
    }

    pub fn new(kind: FormatterKind, debug: bool) -> Self {
        let formatter: Box<dyn Formatter + Send + Sync> = match kind {
            FormatterKind::Text => Box::new(TextFormatter::new()),
            FormatterKind::Json => Box::new(JsonFormatter::new(MismatchPolicy::for_debug(debug))),
        };
        Self { kind, formatter }
    }

    /// Plain text output, used before a format has been selected.
    pub fn text() -> Self {
        Self::new(FormatterKind::Text, false)
    }

    pub fn kind(&self) -> FormatterKind {
        self.kind
    }

    pub fn is_current_format(&self, kind: FormatterKind) -> bool {
        self.kind == kind
    }

    pub fn format(&self, value: &dyn Printable) -> Result<String, FormatError> {
        self.formatter.format(value)
    }

    /// Print `value` to stdout.
    pub fn print(&self, value: &dyn Printable) -> Result<(), FormatError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_to(value, &mut out)
    }

    pub fn print_to(&self, value: &dyn Printable, out: &mut dyn Write) -> Result<(), FormatError> {
        self.formatter.print(value, out)
    }

    /// Report an error message on stderr in the active format.
    pub fn print_error(&self, message: &str) {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        // Nothing sensible remains if stderr itself is gone.
        let _ = self.print_error_to(message, &mut err);
    }

    pub fn print_error_to(&self, message: &str, out: &mut dyn Write) -> io::Result<()> {
        match self.kind {
            FormatterKind::Text => writeln!(out, "Error: {}", message),
            FormatterKind::Json => {
                let document = serde_json::json!({ "error": message });
                writeln!(out, "{}", document)
            }
        }
    }

    pub fn help_policy(&self) -> HelpPolicy {
        match self.kind {
            FormatterKind::Text => HelpPolicy::Allowed,
            FormatterKind::Json => HelpPolicy::Forbidden,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").field("kind", &self.kind).finish()
    }
}
