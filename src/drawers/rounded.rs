//! Rounded blocks: only the outer corners of a connected region are rounded

use rust_decimal::Decimal;

use super::style::{CornerRadius, DEFAULT_CORNER_RADIUS, DEFAULT_RADIUS_RATIO};
use super::Outline;
use crate::error::ConfigError;
use crate::geometry::{Coords, Geometry};
use crate::grid::Neighbors;
use crate::log::warn;
use crate::renderer::config::OutputMode;
use crate::renderer::corners::{CornerCurve, CornerFlags, Corners};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounded {
    radius: Decimal,
    curve: CornerCurve,
}

impl Rounded {
    /// Resolve the corner radius against the shrunk module
    ///
    /// Element mode defaults to a 3px radius drawn with quadratic corners,
    /// path mode to half of the largest radius drawn with arcs. Radii larger
    /// than half the module are clamped.
    pub fn new(
        radius: Option<CornerRadius>,
        mode: OutputMode,
        geometry: &Geometry,
    ) -> Result<Self, ConfigError> {
        let (requested, curve) = match mode {
            OutputMode::Elements => (
                radius.unwrap_or(CornerRadius::Absolute(DEFAULT_CORNER_RADIUS)),
                CornerCurve::Quadratic,
            ),
            OutputMode::Path => (
                radius.unwrap_or(CornerRadius::Ratio(DEFAULT_RADIUS_RATIO)),
                CornerCurve::Arc,
            ),
        };

        let max = geometry.box_half;
        let radius = match requested {
            CornerRadius::Ratio(ratio) => {
                if ratio < Decimal::ZERO {
                    return Err(ConfigError::negative_radius("radius ratio", ratio));
                }
                if ratio > Decimal::ONE {
                    warn!(%ratio, "radius ratio above 1, clamping");
                    max
                } else {
                    max * ratio
                }
            }
            CornerRadius::Absolute(length) => {
                if length < Decimal::ZERO {
                    return Err(ConfigError::negative_radius("radius", length));
                }
                if length > max {
                    warn!(%length, %max, "corner radius exceeds half the module, clamping");
                    max
                } else {
                    length
                }
            }
        };

        Ok(Self { radius, curve })
    }

    pub fn radius(&self) -> Decimal {
        self.radius
    }

    pub fn curve(&self) -> CornerCurve {
        self.curve
    }

    pub fn outline(&self, c: &Coords, neighbors: &Neighbors) -> Outline {
        Outline {
            corners: Corners::from(c),
            radius: self.radius,
            flags: CornerFlags::from_neighbors(neighbors),
            curve: self.curve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ModuleBox, Point};
    use crate::grid::Compass;
    use crate::renderer::units::Unit;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn geometry() -> Geometry {
        Geometry::new(dec!(10), dec!(1))
    }

    fn cell() -> Coords {
        geometry().coords(&ModuleBox::new(
            Point::new(dec!(0), dec!(0)),
            Point::new(dec!(10), dec!(10)),
        ))
    }

    #[test]
    fn test_mode_defaults() {
        let elements = Rounded::new(None, OutputMode::Elements, &geometry()).unwrap();
        assert_eq!(elements.radius(), dec!(3));
        assert_eq!(elements.curve(), CornerCurve::Quadratic);

        let path = Rounded::new(None, OutputMode::Path, &geometry()).unwrap();
        assert_eq!(path.radius(), dec!(2.5));
        assert_eq!(path.curve(), CornerCurve::Arc);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let ratio = Rounded::new(Some(CornerRadius::Ratio(dec!(3))), OutputMode::Path, &geometry());
        assert_eq!(ratio.unwrap().radius(), dec!(5));

        let length = Rounded::new(
            Some(CornerRadius::Absolute(dec!(12))),
            OutputMode::Elements,
            &geometry(),
        );
        assert_eq!(length.unwrap().radius(), dec!(5));
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        assert_eq!(
            Rounded::new(Some(CornerRadius::Ratio(dec!(-0.1))), OutputMode::Path, &geometry()),
            Err(ConfigError::negative_radius("radius ratio", dec!(-0.1)))
        );
        assert!(Rounded::new(
            Some(CornerRadius::Absolute(dec!(-1))),
            OutputMode::Elements,
            &geometry()
        )
        .is_err());
    }

    #[test]
    fn test_isolated_module_rounds_every_corner() {
        let rounded = Rounded::new(Some(CornerRadius::Ratio(dec!(1))), OutputMode::Path, &geometry()).unwrap();
        let outline = rounded.outline(&cell(), &Neighbors::default());
        assert_eq!(outline.flags, CornerFlags::all());
        assert_eq!(
            outline.path().to_svg_d(Unit::Px),
            "M5,0A5,5 0 0 1 10,5A5,5 0 0 1 5,10A5,5 0 0 1 0,5A5,5 0 0 1 5,0Z"
        );
    }

    #[test]
    fn test_north_neighbour_squares_top_corners() {
        let rounded = Rounded::new(None, OutputMode::Elements, &geometry()).unwrap();
        let outline = rounded.outline(&cell(), &Neighbors::from_active(&[Compass::N]));
        assert_eq!(
            outline.path().to_svg_d(Unit::Px),
            "M0,0H10V7Q10,10 7,10H3Q0,10 0,7Z"
        );
    }

    #[test]
    fn test_zero_ratio_is_square() {
        let rounded = Rounded::new(Some(CornerRadius::Ratio(dec!(0))), OutputMode::Path, &geometry()).unwrap();
        let outline = rounded.outline(&cell(), &Neighbors::default());
        assert_eq!(outline.path().to_svg_d(Unit::Px), "M0,0H10V10H0Z");
    }
}
