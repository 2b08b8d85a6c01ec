//! Environment source: `BOARDKIT_*` variables, `__` between nested keys.
//!
//! Values are taken verbatim as strings; `0123` stays `0123`. Only list keys are
//! split, on commas.

use super::split_list;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, Map};

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "BOARDKIT";

const SEPARATOR: &str = "__";

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 1] = ["board_manager.additional_urls"];

/// Add environment overrides to the builder.
///
/// `vars` replaces the process environment when given (tests inject their own).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let lists = list_values(vars.as_ref());
    let mut builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(SEPARATOR)
            .source(vars),
    );
    for (key, items) in lists {
        builder = builder.set_override(key, items)?;
    }
    Ok(builder)
}

/// Variable name carrying `key`, e.g. `BOARDKIT_BOARD_MANAGER__ADDITIONAL_URLS`.
fn variable_name(key: &str) -> String {
    format!("{}_{}", ENV_PREFIX, key.replace('.', SEPARATOR).to_uppercase())
}

fn list_values(vars: Option<&Map<String, String>>) -> Vec<(&'static str, Vec<String>)> {
    LIST_KEYS
        .iter()
        .filter_map(|key| {
            let name = variable_name(key);
            let raw = match vars {
                Some(vars) => vars.get(&name).cloned(),
                None => std::env::var(&name).ok(),
            }?;
            Some((*key, split_list(&raw)))
        })
        .collect()
}
