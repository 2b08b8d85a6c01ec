//! YAML config file source: `--config-file` or `./.cli-config.yml`

use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::path::Path;

/// Add the YAML config file to the builder.
///
/// The file is required: a missing file surfaces as an error when the layer is built,
/// and the caller decides to keep the previous layer instead.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
        });
    }

    Ok(builder.add_source(
        File::from(path)
            .format(FileFormat::Yaml)
            .required(true),
    ))
}
