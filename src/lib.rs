//! qrsvg - draws QR module grids as SVG
//!
//! This library turns a grid of dark/light modules (the output of a QR
//! encoder) into an SVG document, either as one element per module or as a
//! single compound path. Styles range from plain squares to bars and
//! rounded blocks that fuse with their neighbours.
//!
//! # Example
//!
//! ```rust
//! use qrsvg::render;
//!
//! let svg = render("#.#\n.#.\n#.#\n").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("<rect"));
//! ```

pub mod drawers;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod log;
pub mod pipeline;
pub mod renderer;
pub mod settings;

pub use drawers::{Drawer, DrawerStyle, Drawn, Fill, Shape, StyleKind};
pub use error::{ConfigError, GridError};
pub use geometry::{coords, Coords, ModuleBox, Point};
pub use grid::{ModuleGrid, ModuleState, RenderContext};
pub use pipeline::Sweep;
pub use renderer::{OutputMode, SvgBuilder, SvgConfig, Unit};
pub use settings::{Settings, SettingsError};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The module grid could not be built
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Style or context parameters are invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A settings file could not be loaded or applied
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixel size of one module
    pub box_size: Decimal,
    /// Quiet zone, in modules
    pub border: u32,
    /// Module style
    pub style: DrawerStyle,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Row scheduling
    pub sweep: Sweep,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let context = RenderContext::default();
        Self {
            box_size: context.box_size(),
            border: context.border(),
            style: DrawerStyle::default(),
            svg: SvgConfig::default(),
            sweep: Sweep::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module size in pixels
    pub fn with_box_size(mut self, box_size: Decimal) -> Self {
        self.box_size = box_size;
        self
    }

    /// Set the quiet-zone width in modules
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set the module style
    pub fn with_style(mut self, style: DrawerStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.svg.mode = mode;
        self
    }

    /// Set the document unit
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.svg.unit = unit;
        self
    }

    /// Set the row scheduling
    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Validated render context for this configuration
    pub fn context(&self) -> Result<RenderContext, ConfigError> {
        RenderContext::try_new(self.box_size, self.border)
    }
}

/// Render a text grid to SVG with default configuration
///
/// Rows are lines; `#` or `1` marks a dark module, `.` or `0` a light one.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a text grid to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use qrsvg::{render_with_config, DrawerStyle, OutputMode, RenderConfig, StyleKind};
///
/// let config = RenderConfig::new()
///     .with_style(DrawerStyle::new(StyleKind::Rounded))
///     .with_mode(OutputMode::Path);
///
/// let svg = render_with_config("##\n#.\n", &config).unwrap();
/// assert!(svg.contains(r#"id="qr-path""#));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let grid = ModuleGrid::from_text(source)?;
    render_grid(&grid, config)
}

/// Render an already-built module grid
pub fn render_grid(grid: &ModuleGrid, config: &RenderConfig) -> Result<String, RenderError> {
    let context = config.context()?;
    let drawer = Drawer::configure(&config.style, &context, config.svg.mode)?;
    let (width, height) = context.pixel_size(grid)?;
    drawer.check_extent(width.max(height))?;

    let mut sink = SvgBuilder::new(config.svg.clone()).with_path_fill(drawer.fill().clone());
    pipeline::render_modules(grid, &context, &drawer, config.sweep, &mut sink);

    Ok(sink.build(width, height))
}
