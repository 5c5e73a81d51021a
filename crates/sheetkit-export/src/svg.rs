//! SVG document assembly for packed sheets.
//!
//! One document per populated sheet. The document is sized to the sheet and
//! carries one `<path>` per placed part (all of a part's contours as
//! subpaths), stroked with a uniform hairline and no fill -- laser-cutter
//! convention, stroke is the cut line.
//!
//! Part geometry uses a Y-up world frame; a group transform flips the
//! document into SVG's Y-down frame so paths can be emitted untouched.

use serde::{Deserialize, Serialize};

use crate::path::{to_svg_path, PathCommand};

const STROKE_WIDTH_MM: f64 = 0.1;

/// A part's path, already translated into sheet coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub name: String,
    pub commands: Vec<PathCommand>,
}

/// The cut layout for one stock sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDocument {
    /// Index of the sheet instance this document belongs to.
    pub sheet: usize,
    pub width: f64,
    pub height: f64,
    pub parts: Vec<PlacedPart>,
}

impl SheetDocument {
    /// Renders the document as a standalone SVG file.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" standalone=\"no\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = self.width,
            h = self.height
        ));
        out.push_str(&format!(
            "  <g transform=\"translate(0 {}) scale(1 -1)\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\">\n",
            self.height, STROKE_WIDTH_MM
        ));
        for part in &self.parts {
            out.push_str(&format!(
                "    <path id=\"{}\" d=\"{}\"/>\n",
                part.name,
                to_svg_path(&part.commands)
            ));
        }
        out.push_str("  </g>\n");
        out.push_str("</svg>\n");
        out
    }
}
