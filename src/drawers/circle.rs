//! Circular modules (plain and gapped)

use rust_decimal::Decimal;

use super::shape::{Drawn, Fill, Shape};
use crate::geometry::{Coords, Point};
use crate::renderer::config::OutputMode;
use crate::renderer::path::ResolvedPath;

/// `radius` is half the shrunk module size
pub(super) fn draw(coords: &Coords, radius: Decimal, mode: OutputMode, fill: &Fill) -> Drawn {
    match mode {
        OutputMode::Elements => Drawn::Element(Shape::Circle {
            cx: coords.xh,
            cy: coords.yh,
            r: radius,
            fill: fill.clone(),
        }),
        // Two half arcs, west point to east point and back
        OutputMode::Path => Drawn::Fragment(
            ResolvedPath::new()
                .move_to(Point::new(coords.x0, coords.yh))
                .arc_to(Point::new(coords.x1, coords.yh), radius, true)
                .arc_to(Point::new(coords.x0, coords.yh), radius, true)
                .close(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{coords, ModuleBox};
    use crate::renderer::units::Unit;
    use rust_decimal_macros::dec;

    fn cell() -> ModuleBox {
        ModuleBox::new(Point::new(dec!(0), dec!(0)), Point::new(dec!(10), dec!(10)))
    }

    #[test]
    fn test_circle_at_center() {
        let c = coords(&cell(), dec!(10), dec!(1));
        let drawn = draw(&c, dec!(5), OutputMode::Elements, &Fill::default());
        assert_eq!(
            drawn,
            Drawn::Element(Shape::Circle {
                cx: dec!(5),
                cy: dec!(5),
                r: dec!(5),
                fill: Fill::default(),
            })
        );
    }

    #[test]
    fn test_path_circle() {
        let c = coords(&cell(), dec!(10), dec!(0.8));
        let Drawn::Fragment(path) = draw(&c, dec!(4), OutputMode::Path, &Fill::default()) else {
            panic!("expected a fragment");
        };
        assert_eq!(
            path.to_svg_d(Unit::Px),
            "M1,5A4,4 0 0 1 9,5A4,4 0 0 1 1,5Z"
        );
    }
}
