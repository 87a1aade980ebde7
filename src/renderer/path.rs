//! Path segments and their SVG `d` serialization
//!
//! Shapes build a [`ResolvedPath`] in unscaled pixel space; the unit is
//! only applied when the path is written out.

use rust_decimal::Decimal;

use super::units::Unit;
use crate::geometry::Point;

/// A segment in a resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Horizontal line to an x coordinate
    HorizontalTo(Decimal),
    /// Vertical line to a y coordinate
    VerticalTo(Decimal),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: Decimal,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
    /// Close path back to start
    Close,
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.push(PathSegment::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.push(PathSegment::LineTo(point));
        self
    }

    pub fn horizontal_to(mut self, x: Decimal) -> Self {
        self.push(PathSegment::HorizontalTo(x));
        self
    }

    pub fn vertical_to(mut self, y: Decimal) -> Self {
        self.push(PathSegment::VerticalTo(y));
        self
    }

    pub fn arc_to(mut self, end: Point, radius: Decimal, sweep: bool) -> Self {
        self.push(PathSegment::ArcTo {
            end,
            radius,
            large_arc: false,
            sweep,
        });
        self
    }

    pub fn quadratic_to(mut self, control: Point, end: Point) -> Self {
        self.push(PathSegment::QuadraticTo { control, end });
        self
    }

    pub fn close(mut self) -> Self {
        self.push(PathSegment::Close);
        self
    }

    /// Append another path's segments after this one
    pub fn extend(&mut self, other: ResolvedPath) {
        self.segments.extend(other.segments);
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self, unit: Unit) -> String {
        let mut d = String::new();
        self.write_svg_d(unit, &mut d);
        d
    }

    /// Append the `d` text of this path to `d`
    pub fn write_svg_d(&self, unit: Unit, d: &mut String) {
        let n = |v: Decimal| unit.number(v);
        let p = |pt: &Point| format!("{},{}", unit.number(pt.x), unit.number(pt.y));

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(pt) => {
                    d.push_str(&format!("M{}", p(pt)));
                }
                PathSegment::LineTo(pt) => {
                    d.push_str(&format!("L{}", p(pt)));
                }
                PathSegment::HorizontalTo(x) => {
                    d.push_str(&format!("H{}", n(*x)));
                }
                PathSegment::VerticalTo(y) => {
                    d.push_str(&format!("V{}", n(*y)));
                }
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let large = if *large_arc { 1 } else { 0 };
                    let sw = if *sweep { 1 } else { 0 };
                    // SVG arc: A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                    let r = n(*radius);
                    d.push_str(&format!("A{},{} 0 {} {} {}", r, r, large, sw, p(end)));
                }
                PathSegment::QuadraticTo { control, end } => {
                    d.push_str(&format!("Q{} {}", p(control), p(end)));
                }
                PathSegment::Close => {
                    d.push('Z');
                }
            }
        }
    }
}
