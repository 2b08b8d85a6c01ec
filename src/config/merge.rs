//! Layer stacking: each layer is merged onto the committed result and only kept when
//! the merged candidate still deserializes into a [`Configuration`].

mod merge_policy;

use crate::config::Configuration;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};

pub(crate) use merge_policy::builder_with_defaults;

/// Configuration merged from every layer committed so far
pub(crate) struct LayerStack {
    committed: Config,
}

impl LayerStack {
    /// Start the stack from the defaults layer. Failure here is fatal to resolution.
    pub fn from_defaults(defaults: &Configuration) -> Result<Self, ConfigError> {
        let committed = builder_with_defaults(defaults)?.build()?;
        committed.clone().try_deserialize::<Configuration>()?;
        Ok(Self { committed })
    }

    /// Merge one layer on top of the committed result.
    ///
    /// Keys the layer defines replace the committed ones field by field; everything
    /// else is kept. On error the committed result is left untouched.
    pub fn apply<F>(&mut self, layer: F) -> Result<(), ConfigError>
    where
        F: FnOnce(ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError>,
    {
        let builder = Config::builder().add_source(self.committed.clone());
        let candidate = layer(builder)?.build()?;
        candidate.clone().try_deserialize::<Configuration>()?;
        self.committed = candidate;
        Ok(())
    }

    /// Current merged configuration.
    pub fn current(&self) -> Result<Configuration, ConfigError> {
        Ok(self.committed.clone().try_deserialize::<Configuration>()?)
    }
}
