//! Drawer style parameters

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::shape::Fill;
use crate::error::ConfigError;

/// Size ratio of the gapped styles
pub const GAPPED_SIZE_RATIO: Decimal = dec!(0.8);
/// Default bar thickness relative to the shrunk module
pub const DEFAULT_SHRINK: Decimal = dec!(0.8);
/// Default corner radius of element-mode rounded blocks, in pixels
pub const DEFAULT_CORNER_RADIUS: Decimal = dec!(3);
/// Default corner radius of path-mode rounded blocks, relative to half the module
pub const DEFAULT_RADIUS_RATIO: Decimal = dec!(0.5);

/// The available module styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    #[default]
    Square,
    GappedSquare,
    Circle,
    GappedCircle,
    HorizontalBars,
    VerticalBars,
    Rounded,
}

impl StyleKind {
    pub const ALL: [StyleKind; 7] = [
        StyleKind::Square,
        StyleKind::GappedSquare,
        StyleKind::Circle,
        StyleKind::GappedCircle,
        StyleKind::HorizontalBars,
        StyleKind::VerticalBars,
        StyleKind::Rounded,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Square => "square",
            StyleKind::GappedSquare => "gapped-square",
            StyleKind::Circle => "circle",
            StyleKind::GappedCircle => "gapped-circle",
            StyleKind::HorizontalBars => "horizontal-bars",
            StyleKind::VerticalBars => "vertical-bars",
            StyleKind::Rounded => "rounded",
        }
    }

    /// Size ratio used when the style does not set one
    pub fn default_size_ratio(self) -> Decimal {
        match self {
            StyleKind::GappedSquare | StyleKind::GappedCircle => GAPPED_SIZE_RATIO,
            _ => Decimal::ONE,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('_', "-").to_ascii_lowercase();
        StyleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = StyleKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown style '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Corner radius of rounded blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerRadius {
    /// Fraction of half the shrunk module, in `[0, 1]`
    Ratio(Decimal),
    /// Absolute length in pixels
    Absolute(Decimal),
}

/// Everything a drawer is configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerStyle {
    pub kind: StyleKind,
    /// Falls back to the kind's default when unset
    pub size_ratio: Option<Decimal>,
    pub fill: Fill,
    /// Bar thickness relative to the shrunk module
    pub shrink: Decimal,
    /// Falls back to the output mode's default when unset
    pub radius: Option<CornerRadius>,
    /// Divisor applied to element-mode bars and rounded blocks
    pub output_scale: Decimal,
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self::new(StyleKind::default())
    }
}

impl DrawerStyle {
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            size_ratio: None,
            fill: Fill::default(),
            shrink: DEFAULT_SHRINK,
            radius: None,
            output_scale: Decimal::ONE,
        }
    }

    pub fn with_size_ratio(mut self, ratio: Decimal) -> Self {
        self.size_ratio = Some(ratio);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_shrink(mut self, shrink: Decimal) -> Self {
        self.shrink = shrink;
        self
    }

    pub fn with_radius_ratio(mut self, ratio: Decimal) -> Self {
        self.radius = Some(CornerRadius::Ratio(ratio));
        self
    }

    pub fn with_radius(mut self, radius: Decimal) -> Self {
        self.radius = Some(CornerRadius::Absolute(radius));
        self
    }

    pub fn with_output_scale(mut self, scale: Decimal) -> Self {
        self.output_scale = scale;
        self
    }

    /// The size ratio in effect
    pub fn effective_size_ratio(&self) -> Decimal {
        self.size_ratio
            .unwrap_or_else(|| self.kind.default_size_ratio())
    }
}

/// Convert a configuration float into an exact decimal
///
/// Goes through the shortest decimal text of the float, so `0.1` becomes
/// exactly `0.1`.
pub fn to_decimal(parameter: &'static str, value: f64) -> Result<Decimal, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::not_a_number(parameter, value));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| ConfigError::not_a_number(parameter, value))
}
