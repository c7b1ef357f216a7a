//! Shared configuration loader for the wamark toolchain.
//!
//! `defaults/wamark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`WamarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wamark_babel::{ConvertOptions, Relocation};
use wamark_editor::{ActionOverride, ActionSpec, ClassOverrides, EditorConfiguration};

const DEFAULT_TOML: &str = include_str!("../defaults/wamark.default.toml");

/// Top-level configuration consumed by wamark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WamarkConfig {
    pub convert: ConvertConfig,
    pub editor: EditorConfig,
}

/// Converter knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub relocation: RelocationMode,
    pub passes: usize,
    pub decode_nbsp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RelocationMode {
    #[serde(rename = "fixed-point")]
    FixedPoint,
    #[serde(rename = "passes")]
    Passes,
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            relocation: match config.relocation {
                RelocationMode::FixedPoint => Relocation::FixedPoint,
                RelocationMode::Passes => Relocation::Passes(config.passes),
            },
            decode_nbsp: config.decode_nbsp,
        }
    }
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

/// Editor surface settings; the change callback is supplied at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    pub actions: Vec<ActionEntry>,
    pub default_paragraph_separator: String,
    #[serde(default)]
    pub style_with_css: Option<bool>,
    pub classes: ClassesConfig,
}

/// A toolbar entry: a built-in name or a partial override table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActionEntry {
    Name(String),
    Override {
        name: String,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        title: Option<String>,
    },
}

impl From<&ActionEntry> for ActionSpec {
    fn from(entry: &ActionEntry) -> Self {
        match entry {
            ActionEntry::Name(name) => ActionSpec::Named(name.clone()),
            ActionEntry::Override { name, icon, title } => {
                let mut over = ActionOverride::new(name.clone());
                if let Some(icon) = icon {
                    over = over.icon(icon.clone());
                }
                if let Some(title) = title {
                    over = over.title(title.clone());
                }
                ActionSpec::Override(over)
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassesConfig {
    pub actionbar: String,
    pub button: String,
    pub content: String,
    pub selected: String,
}

impl From<&ClassesConfig> for ClassOverrides {
    fn from(config: &ClassesConfig) -> Self {
        ClassOverrides {
            actionbar: Some(config.actionbar.clone()),
            button: Some(config.button.clone()),
            content: Some(config.content.clone()),
            selected: Some(config.selected.clone()),
        }
    }
}

impl EditorConfig {
    /// Build an editor configuration around the given change callback.
    pub fn to_configuration<F>(&self, on_change: F) -> EditorConfiguration
    where
        F: FnMut(&str) + 'static,
    {
        let mut configuration = EditorConfiguration::new(on_change)
            .actions(self.actions.iter().map(ActionSpec::from))
            .classes(ClassOverrides::from(&self.classes))
            .default_paragraph_separator(self.default_paragraph_separator.clone());
        configuration.style_with_css = self.style_with_css;
        configuration
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
    pub fn build(self) -> Result<WamarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WamarkConfig, ConfigError> {
    Loader::new().build()
}
