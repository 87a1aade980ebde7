//! Bars: adjacent modules along one axis fuse into a continuous bar
//!
//! A bar end is capped with a half-round whenever there is no active
//! neighbour on that side, so an isolated module becomes a pill.

use rust_decimal::Decimal;

use super::Outline;
use crate::error::ConfigError;
use crate::geometry::{Coords, Geometry};
use crate::grid::{Compass, Neighbors};
use crate::renderer::corners::{CornerCurve, CornerFlags, Corners};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Name of the shrink applied across this axis
    fn shrink_name(self) -> &'static str {
        match self {
            Axis::Horizontal => "vertical",
            Axis::Vertical => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bars {
    axis: Axis,
    /// Gap between the shrunk module edge and the bar, on each long side
    inset: Decimal,
    /// Half the bar thickness
    radius: Decimal,
}

impl Bars {
    pub fn new(axis: Axis, shrink: Decimal, geometry: &Geometry) -> Result<Self, ConfigError> {
        if shrink <= Decimal::ZERO || shrink > Decimal::ONE {
            return Err(ConfigError::shrink(axis.shrink_name(), shrink));
        }
        let thickness = geometry.box_size * shrink;
        Ok(Self {
            axis,
            inset: (geometry.box_size - thickness) / Decimal::TWO,
            radius: thickness / Decimal::TWO,
        })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn radius(&self) -> Decimal {
        self.radius
    }

    pub fn directions(&self) -> &'static [Compass] {
        match self.axis {
            Axis::Horizontal => &[Compass::E, Compass::W],
            Axis::Vertical => &[Compass::N, Compass::S],
        }
    }

    pub fn outline(&self, c: &Coords, neighbors: &Neighbors) -> Outline {
        let (corners, flags) = match self.axis {
            Axis::Horizontal => {
                let (west, east) = (!neighbors.w(), !neighbors.e());
                (
                    Corners::rect(c.x0, c.y0 + self.inset, c.x1, c.y1 - self.inset),
                    CornerFlags {
                        tl: west,
                        bl: west,
                        tr: east,
                        br: east,
                    },
                )
            }
            Axis::Vertical => {
                let (north, south) = (!neighbors.n(), !neighbors.s());
                (
                    Corners::rect(c.x0 + self.inset, c.y0, c.x1 - self.inset, c.y1),
                    CornerFlags {
                        tl: north,
                        tr: north,
                        bl: south,
                        br: south,
                    },
                )
            }
        };

        Outline {
            corners,
            radius: self.radius,
            flags,
            curve: CornerCurve::Arc,
        }
    }
}
