//! Selective corner rounding
//!
//! One builder covers every combination of rounded corners: the outline is
//! walked clockwise from the top-left corner (SVG y-down), straight edges
//! become `H`/`V` segments, and each rounded corner becomes a quarter-round.

use rust_decimal::Decimal;

use super::path::ResolvedPath;
use crate::geometry::{Coords, Point};
use crate::grid::Neighbors;

/// The four corners of a rectangle, named in screen orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub tl: Point,
    pub tr: Point,
    pub br: Point,
    pub bl: Point,
}

impl Corners {
    /// Corners of an axis-aligned rectangle
    pub fn rect(x0: Decimal, y0: Decimal, x1: Decimal, y1: Decimal) -> Self {
        Self {
            tl: Point::new(x0, y0),
            tr: Point::new(x1, y0),
            br: Point::new(x1, y1),
            bl: Point::new(x0, y1),
        }
    }

    /// Divide every corner by `scale` (output-scale correction)
    pub fn scaled_down(&self, scale: Decimal) -> Self {
        if scale == Decimal::ONE {
            return *self;
        }
        let s = |p: Point| Point::new(p.x / scale, p.y / scale);
        Self {
            tl: s(self.tl),
            tr: s(self.tr),
            br: s(self.br),
            bl: s(self.bl),
        }
    }
}

impl From<&Coords> for Corners {
    fn from(c: &Coords) -> Self {
        Corners::rect(c.x0, c.y0, c.x1, c.y1)
    }
}

/// Which corners get rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerFlags {
    pub tl: bool,
    pub tr: bool,
    pub br: bool,
    pub bl: bool,
}

impl CornerFlags {
    pub fn all() -> Self {
        Self {
            tl: true,
            tr: true,
            br: true,
            bl: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// A corner is rounded iff both orthogonal neighbours touching it are inactive
    pub fn from_neighbors(n: &Neighbors) -> Self {
        Self {
            tl: !(n.n() || n.w()),
            tr: !(n.n() || n.e()),
            br: !(n.s() || n.e()),
            bl: !(n.s() || n.w()),
        }
    }
}

/// How a rounded corner is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerCurve {
    /// Circular quarter arc (`A r,r 0 0 1`)
    Arc,
    /// Quadratic curve with the square corner as control point
    Quadratic,
}

fn turn(
    path: ResolvedPath,
    curve: CornerCurve,
    corner: Point,
    end: Point,
    radius: Decimal,
) -> ResolvedPath {
    match curve {
        CornerCurve::Arc => path.arc_to(end, radius, true),
        CornerCurve::Quadratic => path.quadratic_to(corner, end),
    }
}

/// Build a closed clockwise outline with the flagged corners rounded
///
/// `radius` must not exceed half the shorter side; callers clamp it when
/// the drawer is configured. A zero radius leaves every corner square, and
/// straight segments of zero length are left out.
pub fn build_dynamic_path(
    corners: &Corners,
    radius: Decimal,
    flags: CornerFlags,
    curve: CornerCurve,
) -> ResolvedPath {
    let flags = if radius > Decimal::ZERO {
        flags
    } else {
        CornerFlags::none()
    };
    let r = radius;
    let Corners { tl, tr, br, bl } = *corners;

    let start = if flags.tl {
        Point::new(tl.x + r, tl.y)
    } else {
        tl
    };
    let mut path = ResolvedPath::new().move_to(start);

    // Top edge, then the top-right corner
    let mut at = start;
    let top_end = if flags.tr { tr.x - r } else { tr.x };
    if top_end != at.x {
        path = path.horizontal_to(top_end);
        at.x = top_end;
    }
    if flags.tr {
        at = Point::new(tr.x, tr.y + r);
        path = turn(path, curve, tr, at, r);
    }

    // Right edge, bottom-right corner
    let right_end = if flags.br { br.y - r } else { br.y };
    if right_end != at.y {
        path = path.vertical_to(right_end);
        at.y = right_end;
    }
    if flags.br {
        at = Point::new(br.x - r, br.y);
        path = turn(path, curve, br, at, r);
    }

    // Bottom edge, bottom-left corner
    let bottom_end = if flags.bl { bl.x + r } else { bl.x };
    if bottom_end != at.x {
        path = path.horizontal_to(bottom_end);
        at.x = bottom_end;
    }
    if flags.bl {
        at = Point::new(bl.x, bl.y - r);
        path = turn(path, curve, bl, at, r);
    }

    // Left edge; a square top-left corner is closed by `Z` alone
    if flags.tl {
        let left_end = tl.y + r;
        if left_end != at.y {
            path = path.vertical_to(left_end);
        }
        path = turn(path, curve, tl, start, r);
    }

    path.close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Compass;
    use crate::renderer::path::PathSegment;
    use crate::renderer::units::Unit;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn cell() -> Corners {
        Corners::rect(dec!(0), dec!(0), dec!(10), dec!(10))
    }

    fn rounded_corners(flags: CornerFlags) -> usize {
        [flags.tl, flags.tr, flags.br, flags.bl]
            .into_iter()
            .filter(|f| *f)
            .count()
    }

    fn curves(path: &ResolvedPath) -> usize {
        path.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::ArcTo { .. } | PathSegment::QuadraticTo { .. }))
            .count()
    }

    #[test]
    fn test_no_rounding_is_plain_rectangle() {
        let path = build_dynamic_path(&cell(), dec!(3), CornerFlags::none(), CornerCurve::Arc);
        assert_eq!(path.to_svg_d(Unit::Px), "M0,0H10V10H0Z");
    }

    #[test]
    fn test_zero_radius_ignores_flags() {
        let path = build_dynamic_path(&cell(), dec!(0), CornerFlags::all(), CornerCurve::Arc);
        assert_eq!(path.to_svg_d(Unit::Px), "M0,0H10V10H0Z");
    }

    #[test]
    fn test_all_corners_arc() {
        let path = build_dynamic_path(&cell(), dec!(3), CornerFlags::all(), CornerCurve::Arc);
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M3,0H7A3,3 0 0 1 10,3V7A3,3 0 0 1 7,10H3A3,3 0 0 1 0,7V3A3,3 0 0 1 3,0Z"
        );
    }

    #[test]
    fn test_all_corners_quadratic() {
        let path = build_dynamic_path(&cell(), dec!(3), CornerFlags::all(), CornerCurve::Quadratic);
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M3,0H7Q10,0 10,3V7Q10,10 7,10H3Q0,10 0,7V3Q0,0 3,0Z"
        );
    }

    #[test]
    fn test_full_radius_is_clean_circle_outline() {
        // Half the side: every straight segment collapses and is dropped.
        let path = build_dynamic_path(&cell(), dec!(5), CornerFlags::all(), CornerCurve::Arc);
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M5,0A5,5 0 0 1 10,5A5,5 0 0 1 5,10A5,5 0 0 1 0,5A5,5 0 0 1 5,0Z"
        );
    }

    #[test]
    fn test_pill_caps() {
        // 20 wide, 10 tall: both ends rounded with half the thickness.
        let bar = Corners::rect(dec!(0), dec!(0), dec!(20), dec!(10));
        let path = build_dynamic_path(&bar, dec!(5), CornerFlags::all(), CornerCurve::Arc);
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M5,0H15A5,5 0 0 1 20,5A5,5 0 0 1 15,10H5A5,5 0 0 1 0,5A5,5 0 0 1 5,0Z"
        );
    }

    #[test]
    fn test_single_rounded_end() {
        let flags = CornerFlags {
            tl: true,
            bl: true,
            ..CornerFlags::none()
        };
        let bar = Corners::rect(dec!(0), dec!(0), dec!(10), dec!(10));
        let path = build_dynamic_path(&bar, dec!(5), flags, CornerCurve::Arc);
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M5,0H10V10H5A5,5 0 0 1 0,5A5,5 0 0 1 5,0Z"
        );
    }

    #[test]
    fn test_corner_flags_all_sixteen_combinations() {
        for mask in 0u8..16 {
            let (n, e, s, w) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let neighbors = Neighbors::default()
                .with(Compass::N, n)
                .with(Compass::E, e)
                .with(Compass::S, s)
                .with(Compass::W, w);
            let flags = CornerFlags::from_neighbors(&neighbors);

            assert_eq!(flags.tl, !n && !w, "tl for mask {mask:04b}");
            assert_eq!(flags.tr, !n && !e, "tr for mask {mask:04b}");
            assert_eq!(flags.br, !s && !e, "br for mask {mask:04b}");
            assert_eq!(flags.bl, !s && !w, "bl for mask {mask:04b}");

            for curve in [CornerCurve::Arc, CornerCurve::Quadratic] {
                let path = build_dynamic_path(&cell(), dec!(3), flags, curve);
                assert_eq!(curves(&path), rounded_corners(flags), "mask {mask:04b}");
                assert_eq!(path.segments.last(), Some(&PathSegment::Close));
            }
        }
    }

    #[test]
    fn test_diagonals_do_not_affect_corners() {
        let neighbors = Neighbors::from_active(&[Compass::NE, Compass::SE, Compass::SW, Compass::NW]);
        assert_eq!(CornerFlags::from_neighbors(&neighbors), CornerFlags::all());
    }
}
