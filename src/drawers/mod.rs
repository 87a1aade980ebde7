//! Module drawers
//!
//! A [`Drawer`] is configured once per render pass from a [`DrawerStyle`]
//! and the [`RenderContext`]; after that, drawing a module is a pure
//! function of its box and state. Neighbour-aware styles declare the
//! compass directions they need through [`Drawer::directions`], and the
//! pipeline only probes the grid when that list is non-empty.

pub mod bars;
pub mod circle;
pub mod rounded;
pub mod shape;
pub mod square;
pub mod style;

pub use bars::{Axis, Bars};
pub use rounded::Rounded;
pub use shape::{Drawn, Fill, Shape};
pub use style::{to_decimal, CornerRadius, DrawerStyle, StyleKind};

use rust_decimal::Decimal;

use crate::error::ConfigError;
use crate::geometry::{Geometry, ModuleBox};
use crate::grid::{Compass, ModuleState, RenderContext};
use crate::log::debug;
use crate::renderer::config::OutputMode;
use crate::renderer::corners::{build_dynamic_path, CornerCurve, CornerFlags, Corners};
use crate::renderer::path::ResolvedPath;

/// The outline of a fused shape before it is turned into path data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub corners: Corners,
    pub radius: Decimal,
    pub flags: CornerFlags,
    pub curve: CornerCurve,
}

impl Outline {
    pub fn path(&self) -> ResolvedPath {
        build_dynamic_path(&self.corners, self.radius, self.flags, self.curve)
    }

    /// Same outline with every length divided by `scale`
    pub fn scaled_down(&self, scale: Decimal) -> Self {
        Self {
            corners: self.corners.scaled_down(scale),
            radius: self.radius / scale,
            ..*self
        }
    }
}

/// The drawing strategy and its precomputed constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKind {
    Square,
    Circle,
    Bars(Bars),
    Rounded(Rounded),
}

/// A configured, immutable drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawer {
    style: StyleKind,
    kind: DrawerKind,
    mode: OutputMode,
    geometry: Geometry,
    fill: Fill,
    output_scale: Decimal,
}

impl Drawer {
    /// Validate the style and precompute everything `draw` needs
    pub fn configure(
        style: &DrawerStyle,
        context: &RenderContext,
        mode: OutputMode,
    ) -> Result<Self, ConfigError> {
        let size_ratio = style.effective_size_ratio();
        if size_ratio <= Decimal::ZERO || size_ratio > Decimal::ONE {
            return Err(ConfigError::SizeRatio(size_ratio));
        }
        if style.output_scale <= Decimal::ZERO {
            return Err(ConfigError::OutputScale(style.output_scale));
        }

        let geometry = Geometry::new(context.box_size(), size_ratio);
        let kind = match style.kind {
            StyleKind::Square | StyleKind::GappedSquare => DrawerKind::Square,
            StyleKind::Circle | StyleKind::GappedCircle => DrawerKind::Circle,
            StyleKind::HorizontalBars => {
                DrawerKind::Bars(Bars::new(Axis::Horizontal, style.shrink, &geometry)?)
            }
            StyleKind::VerticalBars => {
                DrawerKind::Bars(Bars::new(Axis::Vertical, style.shrink, &geometry)?)
            }
            StyleKind::Rounded => DrawerKind::Rounded(Rounded::new(style.radius, mode, &geometry)?),
        };

        debug!(
            style = %style.kind,
            %mode,
            %size_ratio,
            box_size = %geometry.box_size,
            "configured drawer"
        );

        Ok(Self {
            style: style.kind,
            kind,
            mode,
            geometry,
            fill: style.fill.clone(),
            output_scale: style.output_scale,
        })
    }

    pub fn style(&self) -> StyleKind {
        self.style
    }

    pub fn kind(&self) -> &DrawerKind {
        &self.kind
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Check that a symbol extending to `extent` pixels can be drawn
    ///
    /// Element-mode fused shapes are divided by the output scale, which can
    /// overflow for tiny scales on large symbols.
    pub fn check_extent(&self, extent: Decimal) -> Result<(), ConfigError> {
        let scaled = matches!(self.kind, DrawerKind::Bars(_) | DrawerKind::Rounded(_))
            && self.mode == OutputMode::Elements;
        if scaled && extent.checked_div(self.output_scale).is_none() {
            return Err(ConfigError::out_of_range("output_scale", self.output_scale));
        }
        Ok(())
    }

    /// Compass directions this drawer reads; empty for position-only styles
    pub fn directions(&self) -> &'static [Compass] {
        match &self.kind {
            DrawerKind::Square | DrawerKind::Circle => &[],
            DrawerKind::Bars(bars) => bars.directions(),
            DrawerKind::Rounded(_) => &Compass::ALL,
        }
    }

    pub fn needs_neighbors(&self) -> bool {
        !self.directions().is_empty()
    }

    /// Draw one module; inactive modules produce nothing
    ///
    /// A neighbour-aware drawer given [`ModuleState::Active`] treats every
    /// neighbour as inactive.
    pub fn draw(&self, module: &ModuleBox, state: &ModuleState) -> Option<Drawn> {
        if !state.is_active() {
            return None;
        }

        let coords = self.geometry.coords(module);
        let neighbors = state.neighbors();
        let drawn = match &self.kind {
            DrawerKind::Square => square::draw(&coords, self.mode, &self.fill),
            DrawerKind::Circle => {
                circle::draw(&coords, self.geometry.box_half, self.mode, &self.fill)
            }
            DrawerKind::Bars(bars) => self.fused(bars.outline(&coords, &neighbors)),
            DrawerKind::Rounded(rounded) => self.fused(rounded.outline(&coords, &neighbors)),
        };
        Some(drawn)
    }

    fn fused(&self, outline: Outline) -> Drawn {
        match self.mode {
            OutputMode::Path => Drawn::Fragment(outline.path()),
            OutputMode::Elements => Drawn::Element(Shape::Path {
                path: outline.scaled_down(self.output_scale).path(),
                fill: self.fill.clone(),
            }),
        }
    }
}
