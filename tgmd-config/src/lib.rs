//! Shared configuration loader for the tgmd toolchain.
//!
//! `defaults/tgmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TgmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tgmd_babel::operations::OperationOptions;
use tgmd_babel::options::EntityMappingSpec;
use tgmd_babel::{ConversionOptions, FormatError, RenderOptions, ValidationOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/tgmd.default.toml");

/// Top-level configuration consumed by tgmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TgmdConfig {
    pub convert: ConvertConfig,
    pub render: RenderConfig,
    pub validate: ValidateConfig,
    pub batch: BatchConfig,
}

/// Mirrors [`ConversionOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub convert_html_tags: bool,
    pub auto_escape: bool,
    pub preserve_line_breaks: bool,
    pub strict_mode: bool,
}

impl From<&ConvertConfig> for ConversionOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConversionOptions {
            convert_html_tags: config.convert_html_tags,
            auto_escape: config.auto_escape,
            preserve_line_breaks: config.preserve_line_breaks,
            strict_mode: config.strict_mode,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub entity_mappings: Vec<EntityMappingSpec>,
}

/// Mapping patterns are compiled here, so a bad pattern fails the conversion.
impl TryFrom<&RenderConfig> for RenderOptions {
    type Error = FormatError;

    fn try_from(config: &RenderConfig) -> Result<Self, Self::Error> {
        RenderOptions::from_specs(&config.entity_mappings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateConfig {
    pub strict: bool,
}

impl From<&ValidateConfig> for ValidationOptions {
    fn from(config: &ValidateConfig) -> Self {
        ValidationOptions {
            strict: config.strict,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub continue_on_fail: bool,
}

impl TgmdConfig {
    /// Engine options for every operation.
    pub fn operation_options(&self) -> Result<OperationOptions, FormatError> {
        Ok(OperationOptions {
            conversion: (&self.convert).into(),
            render: RenderOptions::try_from(&self.render)?,
            validation: (&self.validate).into(),
        })
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TgmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TgmdConfig, ConfigError> {
    Loader::new().build()
}
