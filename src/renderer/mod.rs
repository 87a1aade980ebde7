//! SVG output: path data, corner rounding, units and the document sink
//!
//! Drawers produce shapes and path fragments in unscaled pixel space; this
//! module turns them into an SVG string.

pub mod config;
pub mod corners;
pub mod path;
pub mod svg;
pub mod units;

pub use config::{OutputMode, SvgConfig};
pub use corners::{build_dynamic_path, CornerCurve, CornerFlags, Corners};
pub use path::{PathSegment, ResolvedPath};
pub use svg::SvgBuilder;
pub use units::Unit;
