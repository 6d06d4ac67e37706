//! Layered configuration for markstyle parsers.
//!
//! `defaults/markstyle.default.toml` is embedded so that the documented defaults and the
//! runtime behavior stay in sync. Applications layer user-specific files and single-key
//! overrides on top of those defaults via [`Loader`], deserialize into [`MarkstyleConfig`] and
//! convert the result into [`markstyle::ParserOptions`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use markstyle::url::{self, Url};
use markstyle::{BaseStyle, Color, ColorParseError, Font, ParagraphStyle, ParserOptions, Size};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/markstyle.default.toml");

/// Top-level configuration consumed by markstyle applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkstyleConfig {
    pub style: StyleConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    pub links: LinksConfig,
    pub lists: ListsConfig,
}

/// Base style every element derives its attributes from.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub font: Font,
    pub bold_font: Option<Font>,
    pub italic_font: Option<Font>,
    pub code_font: Option<Font>,
    pub foreground: String,
    pub background: String,
    pub link_color: Option<String>,
    #[serde(default)]
    pub paragraph: ParagraphStyle,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesConfig {
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub automatic_detection: bool,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListsConfig {
    pub automatic_conversion: bool,
}

/// A configuration value that deserialized fine but means nothing to the parser
#[derive(Debug, Error)]
pub enum ConfigConversionError {
    #[error("invalid color for `{key}`")]
    InvalidColor {
        key: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("invalid base url '{value}'")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Anything that can go wrong between the TOML layers and a ready [`ParserOptions`]
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Conversion(#[from] ConfigConversionError),
}

fn parse_color(key: &'static str, value: &str) -> Result<Color, ConfigConversionError> {
    value
        .parse()
        .map_err(|source| ConfigConversionError::InvalidColor { key, source })
}

impl ImagesConfig {
    /// The maximum image size; a missing dimension is unbounded.
    pub fn max_size(&self) -> Option<Size> {
        match (self.max_width, self.max_height) {
            (None, None) => None,
            (width, height) => Some(Size::new(
                width.unwrap_or(f32::INFINITY),
                height.unwrap_or(f32::INFINITY),
            )),
        }
    }
}

impl TryFrom<&StyleConfig> for BaseStyle {
    type Error = ConfigConversionError;

    fn try_from(config: &StyleConfig) -> Result<Self, Self::Error> {
        let link_color = config
            .link_color
            .as_deref()
            .map(|value| parse_color("style.link_color", value))
            .transpose()?;
        Ok(BaseStyle {
            font: config.font.clone(),
            bold_font: config.bold_font.clone(),
            italic_font: config.italic_font.clone(),
            code_font: config.code_font.clone(),
            color: parse_color("style.foreground", &config.foreground)?,
            background: parse_color("style.background", &config.background)?,
            link_color,
            paragraph: config.paragraph.clone(),
        })
    }
}

impl TryFrom<MarkstyleConfig> for ParserOptions {
    type Error = ConfigConversionError;

    fn try_from(config: MarkstyleConfig) -> Result<Self, Self::Error> {
        let base_url = config
            .links
            .base_url
            .map(|value| {
                Url::parse(&value)
                    .map_err(|source| ConfigConversionError::InvalidBaseUrl { value, source })
            })
            .transpose()?;
        Ok(ParserOptions {
            style: BaseStyle::try_from(&config.style)?,
            max_image_size: config.images.max_size(),
            base_url,
            automatic_link_detection: config.links.automatic_detection,
            automatic_list_conversion: config.lists.automatic_conversion,
            attachment_renderer: None,
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

    /// Layer TOML text, e.g. settings stored by the host application.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
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
    pub fn build(self) -> Result<MarkstyleConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Finalize the builder straight into parser options.
    pub fn build_options(self) -> Result<ParserOptions, LoadError> {
        Ok(ParserOptions::try_from(self.build()?)?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkstyleConfig, ConfigError> {
    Loader::new().build()
}

/// Parser options built from the defaults alone.
pub fn load_parser_options() -> Result<ParserOptions, LoadError> {
    Loader::new().build_options()
}
