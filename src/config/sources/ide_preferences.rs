//! IDE preferences source: `<data dir>/preferences.txt`, consulted only when bundled.

use super::split_list;
use crate::config::IdePreferences;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::Path;

/// Preference keys copied verbatim into configuration keys
const STRING_KEYS: [(&str, &str); 5] = [
    ("sketchbook.path", "sketchbook_path"),
    ("proxy.type", "proxy_type"),
    ("proxy.manual.hostname", "proxy_manual_config.hostname"),
    ("proxy.manual.username", "proxy_manual_config.username"),
    ("proxy.manual.password", "proxy_manual_config.password"),
];

const ADDITIONAL_URLS_KEY: &str = "boardsmanager.additional.urls";

/// Load the IDE preferences at `path` and add them to the builder as overrides.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let prefs = IdePreferences::load(path)?;
    apply(builder, &prefs)
}

pub(crate) fn apply(
    mut builder: ConfigBuilder<DefaultState>,
    prefs: &IdePreferences,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (pref_key, config_key) in STRING_KEYS {
        if let Some(value) = prefs.get(pref_key) {
            builder = builder.set_override(config_key, value)?;
        }
    }

    if let Some(urls) = prefs.get(ADDITIONAL_URLS_KEY) {
        builder = builder.set_override("board_manager.additional_urls", split_list(urls))?;
    }

    Ok(builder)
}
