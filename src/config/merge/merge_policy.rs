//! Merge rules: the defaults layer every other layer overrides.

use crate::config::Configuration;
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults(
    defaults: &Configuration,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("arduino_data", path_value(&defaults.data_dir))?
        .set_default("sketchbook_path", path_value(&defaults.sketchbook_dir))?
        .set_default("arduino_downloads_dir", path_value(&defaults.downloads_dir))?
        .set_default("proxy_type", defaults.proxy_type.as_str())?
        .set_default(
            "proxy_manual_config.hostname",
            defaults.proxy_manual_config.hostname.as_str(),
        )?
        .set_default(
            "proxy_manual_config.username",
            defaults.proxy_manual_config.username.as_str(),
        )?
        .set_default(
            "proxy_manual_config.password",
            defaults.proxy_manual_config.password.as_str(),
        )?
        .set_default(
            "board_manager.additional_urls",
            defaults.board_manager.additional_urls.clone(),
        )
}

fn path_value(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}
