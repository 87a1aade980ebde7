//! Number formatting for document lengths and path data

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Decimal places kept in path data and attribute values
const NUMBER_DP: u32 = 4;
/// Decimal places kept in document width/height
const LENGTH_DP: u32 = 3;

/// Output unit of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// One pixel per user unit
    #[default]
    Px,
    /// Ten pixels per millimetre (a box size of 10 gives 1mm modules)
    Mm,
}

impl Unit {
    fn convert(self, pixels: Decimal) -> Decimal {
        match self {
            Unit::Px => pixels,
            Unit::Mm => pixels / Decimal::TEN,
        }
    }

    /// Bare number for viewBox, path data and attributes
    pub fn number(self, pixels: Decimal) -> String {
        self.convert(pixels).round_dp(NUMBER_DP).normalize().to_string()
    }

    /// Document length for the root `width`/`height`
    pub fn length(self, pixels: Decimal) -> String {
        let value = self.convert(pixels).round_dp(LENGTH_DP).normalize();
        match self {
            Unit::Px => value.to_string(),
            Unit::Mm => format!("{}mm", value),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px => write!(f, "px"),
            Unit::Mm => write!(f, "mm"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Ok(Unit::Px),
            "mm" => Ok(Unit::Mm),
            other => Err(format!("unknown unit '{}' (expected px or mm)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_px_numbers_are_normalized() {
        assert_eq!(Unit::Px.number(dec!(10.00)), "10");
        assert_eq!(Unit::Px.number(dec!(2.50)), "2.5");
        assert_eq!(Unit::Px.number(dec!(0)), "0");
    }

    #[test]
    fn test_mm_numbers() {
        assert_eq!(Unit::Mm.number(dec!(10)), "1");
        assert_eq!(Unit::Mm.number(dec!(15)), "1.5");
        assert_eq!(Unit::Mm.number(dec!(0.5)), "0.05");
    }

    #[test]
    fn test_number_precision_is_fixed() {
        assert_eq!(Unit::Px.number(dec!(1) / dec!(3)), "0.3333");
    }

    #[test]
    fn test_lengths() {
        assert_eq!(Unit::Mm.length(dec!(290)), "29mm");
        assert_eq!(Unit::Mm.length(dec!(295)), "29.5mm");
        assert_eq!(Unit::Mm.length(dec!(12.3456)), "1.235mm");
        // Ties round to even.
        assert_eq!(Unit::Mm.length(dec!(12.345)), "1.234mm");
        assert_eq!(Unit::Px.length(dec!(290)), "290");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MM".parse::<Unit>(), Ok(Unit::Mm));
        assert_eq!("px".parse::<Unit>(), Ok(Unit::Px));
        assert!("pt".parse::<Unit>().is_err());
    }
}
