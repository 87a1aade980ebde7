//! Error types for grid loading and drawer configuration

use ariadne::{Color, Label, Report, ReportKind, Source};
use rust_decimal::Decimal;
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised once, when a module grid is constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("module grid is empty")]
    Empty,

    #[error("row {row} has {found} modules, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
        span: Option<Span>,
    },

    #[error("invalid module character {ch:?} at line {line}, column {column}")]
    InvalidCell {
        line: usize,
        column: usize,
        ch: char,
        span: Span,
    },
}

impl GridError {
    pub fn ragged(row: usize, expected: usize, found: usize) -> Self {
        Self::Ragged {
            row,
            expected,
            found,
            span: None,
        }
    }

    /// Attach the source span of the offending row
    pub fn with_span(self, span: Span) -> Self {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
                ..
            } => Self::Ragged {
                row,
                expected,
                found,
                span: Some(span),
            },
            other => other,
        }
    }

    pub fn invalid_cell(line: usize, column: usize, ch: char, span: Span) -> Self {
        Self::InvalidCell {
            line,
            column,
            ch,
            span,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Ragged { span, .. } => span.as_ref(),
            Self::InvalidCell { span, .. } => Some(span),
            Self::Empty => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}\n", self);
        };

        let hint = match self {
            Self::InvalidCell { .. } => "use '#' or '1' for dark modules, '.' or '0' for light ones",
            _ => "every row must have the same number of modules",
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(hint)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}\n", self),
        }
    }
}

/// Invalid style or context parameters, rejected before drawing begins
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("size ratio must be in (0, 1], got {0}")]
    SizeRatio(Decimal),

    #[error("{axis} shrink must be in (0, 1], got {value}")]
    Shrink { axis: &'static str, value: Decimal },

    #[error("{parameter} must not be negative, got {value}")]
    NegativeRadius {
        parameter: &'static str,
        value: Decimal,
    },

    #[error("box size must be positive, got {0}")]
    BoxSize(Decimal),

    #[error("output scale must be positive, got {0}")]
    OutputScale(Decimal),

    #[error("{parameter} = {value} puts the symbol outside the representable range")]
    OutOfRange {
        parameter: &'static str,
        value: Decimal,
    },

    #[error("{parameter} is not a representable number: {value}")]
    NotANumber {
        parameter: &'static str,
        value: String,
    },
}

impl ConfigError {
    pub fn shrink(axis: &'static str, value: Decimal) -> Self {
        Self::Shrink { axis, value }
    }

    pub fn negative_radius(parameter: &'static str, value: Decimal) -> Self {
        Self::NegativeRadius { parameter, value }
    }

    pub fn out_of_range(parameter: &'static str, value: Decimal) -> Self {
        Self::OutOfRange { parameter, value }
    }

    pub fn not_a_number(parameter: &'static str, value: impl ToString) -> Self {
        Self::NotANumber {
            parameter,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_cell_display() {
        let err = GridError::invalid_cell(2, 3, '?', 7..8);
        assert_eq!(
            err.to_string(),
            "invalid module character '?' at line 2, column 3"
        );
        assert_eq!(err.span(), Some(&(7..8)));
    }

    #[test]
    fn test_ragged_span_is_optional() {
        let err = GridError::ragged(1, 3, 2);
        assert!(err.span().is_none());
        let err = err.with_span(4..6);
        assert_eq!(err.span(), Some(&(4..6)));
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_format_points_at_source() {
        let source = "##\n#?\n";
        let err = GridError::invalid_cell(2, 2, '?', 4..5);
        let report = err.format(source, "grid.txt");
        assert!(report.contains("grid.txt"));
        assert!(report.contains("invalid module character"));
    }

    #[test]
    fn test_format_without_span() {
        let report = GridError::Empty.format("", "grid.txt");
        assert_eq!(report, "Error: module grid is empty\n");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::SizeRatio(dec!(1.5)).to_string(),
            "size ratio must be in (0, 1], got 1.5"
        );
        assert_eq!(
            ConfigError::shrink("vertical", dec!(0)).to_string(),
            "vertical shrink must be in (0, 1], got 0"
        );
        assert!(ConfigError::negative_radius("radius", dec!(-1))
            .to_string()
            .contains("must not be negative"));
    }
}
