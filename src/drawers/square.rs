//! Square modules (plain and gapped)

use rust_decimal::Decimal;

use super::shape::{Drawn, Fill, Shape};
use crate::geometry::Coords;
use crate::renderer::config::OutputMode;
use crate::renderer::corners::{build_dynamic_path, CornerCurve, CornerFlags, Corners};

pub(super) fn draw(coords: &Coords, mode: OutputMode, fill: &Fill) -> Drawn {
    match mode {
        OutputMode::Elements => Drawn::Element(Shape::Rect {
            x: coords.x0,
            y: coords.y0,
            width: coords.width(),
            height: coords.height(),
            fill: fill.clone(),
        }),
        OutputMode::Path => Drawn::Fragment(build_dynamic_path(
            &Corners::from(coords),
            Decimal::ZERO,
            CornerFlags::none(),
            CornerCurve::Arc,
        )),
    }
}
