//! SVG document assembly from drawn modules

use rust_decimal::Decimal;

use super::config::OutputMode;
use super::path::ResolvedPath;
use super::SvgConfig;
use crate::drawers::{Drawn, Fill, Shape};

/// Id of the compound path in path mode
pub const QR_PATH_ID: &str = "qr-path";

/// Build an SVG document incrementally
///
/// Elements and fragments are kept in append order; the pipeline is
/// responsible for appending them row by row.
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    path_data: String,
    path_fill: Fill,
    fragments: usize,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            path_data: String::new(),
            path_fill: Fill::default(),
            fragments: 0,
            indent: 1,
        }
    }

    /// Set the fill of the compound path
    pub fn with_path_fill(mut self, fill: Fill) -> Self {
        self.path_fill = fill;
        self
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one element
    pub fn append_shape(&mut self, shape: &Shape) {
        let attrs = shape
            .attributes(self.config.unit)
            .into_iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, escape_xml(&value)))
            .collect::<String>();

        self.elements
            .push(format!("{}<{}{}/>", self.indent_str(), shape.tag(), attrs));
    }

    /// Add a fragment to the compound path
    pub fn append_fragment(&mut self, fragment: &ResolvedPath) {
        fragment.write_svg_d(self.config.unit, &mut self.path_data);
        self.fragments += 1;
    }

    /// Add whatever a drawer produced
    pub fn append(&mut self, drawn: &Drawn) {
        match drawn {
            Drawn::Element(shape) => self.append_shape(shape),
            Drawn::Fragment(fragment) => self.append_fragment(fragment),
        }
    }

    /// Number of elements plus fragments appended so far
    pub fn len(&self) -> usize {
        self.elements.len() + self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the document; `width` and `height` are the symbol size in pixels
    pub fn build(self, width: Decimal, height: Decimal) -> String {
        let unit = self.config.unit;
        let nl = self.newline();
        let indent = self.indent_str();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        // SVG root element
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            unit.length(width),
            unit.length(height),
            unit.number(width),
            unit.number(height)
        ));
        svg.push_str(nl);

        if let Some(background) = &self.config.background {
            svg.push_str(&format!(
                r#"{}<rect x="0" y="0" width="100%" height="100%" fill="{}"/>"#,
                indent,
                escape_xml(background)
            ));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Path mode always carries the compound path, even when it is empty
        if self.config.mode == OutputMode::Path || self.fragments > 0 {
            svg.push_str(&format!(
                r#"{}<path id="{}" d="{}" fill="{}" fill-opacity="1" fill-rule="nonzero" stroke="none"/>"#,
                indent,
                QR_PATH_ID,
                self.path_data,
                escape_xml(self.path_fill.as_str())
            ));
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
