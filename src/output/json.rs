use super::printable::Printable;
use super::Formatter;
use crate::error::FormatError;

/// What the JSON formatter does with a value that is not a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Render nothing and succeed.
    Skip,
    /// Fail with [`FormatError::NotARecord`], carrying the value's text rendering.
    Report,
}

impl MismatchPolicy {
    /// Mismatches are only surfaced while debugging.
    pub fn for_debug(debug: bool) -> Self {
        if debug {
            MismatchPolicy::Report
        } else {
            MismatchPolicy::Skip
        }
    }
}

/// Machine-readable formatter emitting one compact JSON document per value.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    policy: MismatchPolicy,
}

impl JsonFormatter {
    pub fn new(policy: MismatchPolicy) -> Self {
        Self { policy }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, value: &dyn Printable) -> Result<String, FormatError> {
        match value.to_json() {
            Some(document) => Ok(document?),
            None => match self.policy {
                MismatchPolicy::Skip => Ok(String::new()),
                MismatchPolicy::Report => Err(FormatError::NotARecord {
                    rendered: value.to_text(),
                }),
            },
        }
    }
}
