//! # SheetKit Model
//!
//! Data model for the SheetKit fabrication export pipeline:
//! - Planar boundary geometry (points, line/arc edges, closed loops)
//! - The part/assembly tree handed over by the parametric CAD layer
//! - Export configuration (gap margin, stock sheets)
//!
//! The geometry here is descriptive only: boundaries arrive already extracted
//! from the solid kernel (face -> wires -> edges), and this crate just carries
//! and validates them. All algorithmic work lives in `sheetkit-export`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod part;

pub use config::{ExportConfig, SheetSpec};
pub use error::{BoundaryDefect, ConfigError, ConfigResult};
pub use geometry::{polar, BoundaryLoop, Edge, Point, Rect, BOUNDARY_TOL};
pub use part::{FlatPart, PartLeaf, PartNode, Process};
