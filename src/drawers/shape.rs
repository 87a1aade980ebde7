//! What a drawer hands to the output sink

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::renderer::path::ResolvedPath;
use crate::renderer::units::Unit;

/// A paint value such as `#000000`; cheap to clone into every shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct Fill(Arc<str>);

impl Fill {
    pub fn new(value: impl AsRef<str>) -> Self {
        Fill(Arc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::new("#000000")
    }
}

impl From<String> for Fill {
    fn from(value: String) -> Self {
        Fill(Arc::from(value))
    }
}

impl From<&str> for Fill {
    fn from(value: &str) -> Self {
        Fill::new(value)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discrete shape primitive, in unscaled pixel space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rect {
        x: Decimal,
        y: Decimal,
        width: Decimal,
        height: Decimal,
        fill: Fill,
    },
    Circle {
        cx: Decimal,
        cy: Decimal,
        r: Decimal,
        fill: Fill,
    },
    Path {
        path: ResolvedPath,
        fill: Fill,
    },
}

impl Shape {
    /// SVG element name
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "circle",
            Shape::Path { .. } => "path",
        }
    }

    pub fn fill(&self) -> &Fill {
        match self {
            Shape::Rect { fill, .. } | Shape::Circle { fill, .. } | Shape::Path { fill, .. } => {
                fill
            }
        }
    }

    /// Attributes in output order, numbers formatted for `unit`
    pub fn attributes(&self, unit: Unit) -> Vec<(&'static str, String)> {
        let n = |v: &Decimal| unit.number(*v);
        let mut attrs = match self {
            Shape::Rect {
                x,
                y,
                width,
                height,
                ..
            } => vec![
                ("x", n(x)),
                ("y", n(y)),
                ("width", n(width)),
                ("height", n(height)),
            ],
            Shape::Circle { cx, cy, r, .. } => vec![("cx", n(cx)), ("cy", n(cy)), ("r", n(r))],
            Shape::Path { path, .. } => vec![("d", path.to_svg_d(unit))],
        };
        attrs.push(("fill", self.fill().to_string()));
        attrs
    }
}

/// Output of one drawn module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawn {
    /// A standalone element (element mode)
    Element(Shape),
    /// A fragment of the compound path (path mode)
    Fragment(ResolvedPath),
}
