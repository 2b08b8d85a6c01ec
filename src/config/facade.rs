//! Config resolver: the single entry point that stacks every layer in precedence order.

use super::merge::LayerStack;
use super::paths::Defaults;
use super::sources::{environment, ide_preferences, yaml_file};
use super::Configuration;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolves the process configuration from defaults, YAML file, IDE preferences and
/// environment, in that order.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    defaults: Option<Defaults>,
    environment: Option<config::Map<String, String>>,
}

impl ConfigResolver {
    /// Resolver for the running process: detected defaults, real environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use fixed defaults instead of detecting them.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Read environment overrides from `vars` instead of the process environment.
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Defaults layer inputs: the injected ones, or those of the running process.
    pub fn defaults(&self) -> Result<Defaults, ConfigError> {
        match &self.defaults {
            Some(defaults) => Ok(defaults.clone()),
            None => Defaults::detect(),
        }
    }

    /// Resolve the configuration.
    ///
    /// Only a failure to build the defaults is returned; a missing or malformed YAML
    /// file, IDE preferences file or environment value is logged and skipped.
    pub fn resolve(&self, explicit_file: Option<&Path>) -> Result<Configuration, ConfigError> {
        let base = self.defaults()?.configuration();
        let mut stack = LayerStack::from_defaults(&base)?;

        let config_file = explicit_file
            .filter(|path| !path.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base.config_file.clone());

        info!(config_file = %config_file.display(), "Initiating configuration");
        if let Err(e) = stack.apply(|builder| yaml_file::add_to_builder(builder, &config_file)) {
            warn!(error = %e, "Did not manage to get config file, using default configuration");
        }

        if let Some(ide) = &base.ide {
            info!(ide_dir = %ide.dir().display(), "CLI is bundled into the IDE");
            let prefs_path = preferences_path(&stack, &base);
            if let Err(e) = stack.apply(|builder| ide_preferences::add_to_builder(builder, &prefs_path)) {
                warn!(
                    error = %e,
                    "Did not manage to get config file of IDE, using default configuration"
                );
            }
        } else {
            info!("CLI is not bundled into the IDE");
        }

        let vars = self.environment.clone();
        if let Err(e) = stack.apply(|builder| environment::add_to_builder(builder, vars)) {
            warn!(error = %e, "Ignoring invalid configuration from environment");
        }

        let mut resolved = stack.current()?;
        resolved.config_file = config_file;
        resolved.ide = base.ide;
        info!("Configuration set");
        Ok(resolved)
    }
}

/// Preferences live in the data directory resolved so far; the YAML file may move it.
fn preferences_path(stack: &LayerStack, base: &Configuration) -> PathBuf {
    stack
        .current()
        .map(|current| current.ide_preferences_path())
        .unwrap_or_else(|_| base.ide_preferences_path())
}
