//! Configuration for SVG rendering

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::units::Unit;

/// How drawn modules reach the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One element (`rect`, `circle` or `path`) per module
    #[default]
    Elements,
    /// Path fragments merged into a single compound `path`
    Path,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Elements => write!(f, "elements"),
            OutputMode::Path => write!(f, "path"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elements" | "element" => Ok(OutputMode::Elements),
            "path" => Ok(OutputMode::Path),
            other => Err(format!(
                "unknown output mode '{}' (expected elements or path)",
                other
            )),
        }
    }
}

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Unit of the document width, height and coordinates
    pub unit: Unit,

    /// Discrete elements or one compound path
    pub mode: OutputMode,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Fill of a full-size background rectangle, if any
    pub background: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Mm,
            mode: OutputMode::Elements,
            standalone: true,
            pretty_print: true,
            background: None,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document unit
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Paint a background behind the modules
    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = Some(fill.into());
        self
    }

    /// Leave the background transparent
    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }
}
