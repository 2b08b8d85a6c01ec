use super::printable::Printable;
use super::Formatter;
use crate::error::FormatError;

/// Human-readable formatter: every value renders as its text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, value: &dyn Printable) -> Result<String, FormatError> {
        Ok(value.to_text())
    }
}
