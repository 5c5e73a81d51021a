//! # SheetKit Export
//!
//! The 2D fabrication export pipeline. Three stages, run strictly in order:
//!
//! 1. **Extract** — walk the part/assembly tree depth-first, select leaf parts
//!    tagged for the requested manufacturing process, and give each a unique,
//!    stable name.
//! 2. **Convert** — turn each part's planar boundary loops into closed vector
//!    paths (line and elliptical-arc commands with derived sweep/large-arc
//!    flags).
//! 3. **Pack** — place each part's gap-padded bounding rectangle onto stock
//!    sheets with a deterministic shelf packer, then assemble one SVG document
//!    per populated sheet.
//!
//! Each stage fully consumes its input and hands a fresh structure to the
//! next; nothing is mutated in place and nothing is cached across runs.

pub mod error;
pub mod extract;
pub mod pack;
pub mod path;
pub mod pipeline;
pub mod svg;

pub use error::{ExportError, ExportResult};
pub use extract::{extract, Extractor};
pub use pack::{pack, PackRequest, Packer, Placement};
pub use path::{loop_to_commands, to_svg_path, translate, PathCommand};
pub use pipeline::export_lasercut;
pub use svg::{PlacedPart, SheetDocument};
