//! Layer sources applied on top of the defaults, in precedence order.

pub(crate) mod environment;
pub(crate) mod ide_preferences;
pub(crate) mod yaml_file;

/// Split a comma-separated list, dropping blank items.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
