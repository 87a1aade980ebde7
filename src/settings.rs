//! TOML settings files
//!
//! Every key is optional; a settings file only overrides what it names.
//!
//! ```toml
//! box_size = 10
//! border = 4
//! unit = "mm"
//! mode = "path"
//! sweep = "parallel"
//! background = "#ffffff"
//!
//! [style]
//! kind = "rounded"
//! radius_ratio = 0.5
//! fill = "#000000"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::drawers::{to_decimal, CornerRadius, StyleKind};
use crate::error::ConfigError;
use crate::pipeline::Sweep;
use crate::renderer::{OutputMode, Unit};
use crate::RenderConfig;

/// Errors that can occur when loading or applying settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    Invalid(#[from] ConfigError),
    #[error("`radius` and `radius_ratio` cannot both be set")]
    ConflictingRadius,
}

/// Document-level settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub box_size: Option<f64>,
    pub border: Option<u32>,
    pub unit: Option<Unit>,
    pub mode: Option<OutputMode>,
    pub sweep: Option<Sweep>,
    pub background: Option<String>,
    pub output_scale: Option<f64>,
    pub pretty_print: Option<bool>,
    pub standalone: Option<bool>,
    pub style: StyleSettings,
}

/// The `[style]` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSettings {
    pub kind: Option<StyleKind>,
    pub size_ratio: Option<f64>,
    pub radius_ratio: Option<f64>,
    pub radius: Option<f64>,
    pub shrink: Option<f64>,
    pub fill: Option<String>,
}

impl Settings {
    /// Load settings from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay these settings onto `config`
    ///
    /// Numbers are converted to exact decimals here; range checks happen
    /// when the drawer is configured.
    pub fn apply(&self, mut config: RenderConfig) -> Result<RenderConfig, SettingsError> {
        if let Some(box_size) = self.box_size {
            config.box_size = to_decimal("box_size", box_size)?;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if let Some(unit) = self.unit {
            config.svg.unit = unit;
        }
        if let Some(mode) = self.mode {
            config.svg.mode = mode;
        }
        if let Some(sweep) = self.sweep {
            config.sweep = sweep;
        }
        if let Some(background) = &self.background {
            config.svg.background = Some(background.clone());
        }
        if let Some(pretty) = self.pretty_print {
            config.svg.pretty_print = pretty;
        }
        if let Some(standalone) = self.standalone {
            config.svg.standalone = standalone;
        }
        if let Some(scale) = self.output_scale {
            config.style.output_scale = to_decimal("output_scale", scale)?;
        }

        let style = &self.style;
        if let Some(kind) = style.kind {
            config.style.kind = kind;
        }
        if let Some(ratio) = style.size_ratio {
            config.style.size_ratio = Some(to_decimal("size_ratio", ratio)?);
        }
        if let Some(shrink) = style.shrink {
            config.style.shrink = to_decimal("shrink", shrink)?;
        }
        if let Some(fill) = &style.fill {
            config.style.fill = fill.as_str().into();
        }
        config.style.radius = match (style.radius, style.radius_ratio) {
            (Some(_), Some(_)) => return Err(SettingsError::ConflictingRadius),
            (Some(radius), None) => Some(CornerRadius::Absolute(to_decimal("radius", radius)?)),
            (None, Some(ratio)) => Some(CornerRadius::Ratio(to_decimal("radius_ratio", ratio)?)),
            (None, None) => config.style.radius,
        };

        Ok(config)
    }
}
