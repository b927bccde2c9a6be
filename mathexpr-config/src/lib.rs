//! Shared configuration loader for the mathexpr tools.
//!
//! `defaults/mathexpr.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MathexprConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mathexpr_parser::mathexpr::formats::{OperatorStyle, RenderOptions};
use mathexpr_parser::mathexpr::pipeline::ProcessingOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mathexpr.default.toml");

/// Top-level configuration consumed by mathexpr applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MathexprConfig {
    pub render: RenderConfig,
    pub inspect: InspectConfig,
}

/// Naming used by the normalized call form.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub function_wrapper: String,
    pub atom_wrapper: String,
    pub apply_method: String,
    pub vector_name: String,
    pub set_name: String,
    pub operator_style: OperatorStyle,
}

impl RenderConfig {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            function_wrapper: self.function_wrapper.clone(),
            atom_wrapper: self.atom_wrapper.clone(),
            apply_method: self.apply_method.clone(),
            vector_name: self.vector_name.clone(),
            set_name: self.set_name.clone(),
            operator_style: self.operator_style,
        }
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub default_format: String,
    pub treeviz_label_width: usize,
}

impl MathexprConfig {
    /// Options for the processing pipeline.
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            render: self.render.to_options(),
            treeviz_label_width: self.inspect.treeviz_label_width,
        }
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MathexprConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MathexprConfig, ConfigError> {
    Loader::new().build()
}
