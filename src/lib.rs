//! # SheetKit
//!
//! Fabrication export for parametric part assemblies. A part catalog hands
//! over a part/assembly tree; SheetKit finds the leaf parts tagged for laser
//! cutting, converts each part's planar boundary into a closed vector path,
//! packs the parts onto stock sheets, and writes one SVG cut file per sheet.
//!
//! ## Architecture
//!
//! The workspace has two library crates plus this facade:
//!
//! 1. **sheetkit-model** - part tree, boundary geometry, configuration
//! 2. **sheetkit-export** - extraction, path conversion, packing, documents
//! 3. **sheetkit** - re-exports, logging setup, file output, CLI binary
//!
//! The solid-modeling kernel and the parametric part framework are external
//! collaborators: boundaries arrive already extracted as line/arc edge loops.

use std::path::{Path, PathBuf};

pub use sheetkit_export::{
    export_lasercut, extract, loop_to_commands, pack, to_svg_path, ExportError, ExportResult,
    Extractor, PackRequest, Packer, PathCommand, PlacedPart, Placement, SheetDocument,
};
pub use sheetkit_model::{
    BoundaryDefect, BoundaryLoop, ConfigError, Edge, ExportConfig, FlatPart, PartLeaf, PartNode,
    Point, Process, Rect, SheetSpec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Console output with `RUST_LOG` environment variable support; defaults to
/// the INFO level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;
    Ok(())
}

/// Writes one SVG file per sheet document into `dir`.
///
/// A single document is written as `layout.svg`; multiple documents get
/// zero-padded per-sheet names (`layout_000.svg`, `layout_001.svg`, ...).
/// Returns the written paths in sheet order.
pub fn write_documents(
    documents: &[SheetDocument],
    dir: impl AsRef<Path>,
) -> anyhow::Result<Vec<PathBuf>> {
    use anyhow::Context;

    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(documents.len());
    for document in documents {
        let file_name = if documents.len() == 1 {
            "layout.svg".to_string()
        } else {
            format!("layout_{:03}.svg", document.sheet)
        };
        let path = dir.join(file_name);
        std::fs::write(&path, document.to_svg())
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
