//! The export pipeline: tree -> named flat parts -> paths -> packed sheets.
//!
//! Purely sequential; each stage finishes before the next starts and no
//! stage mutates another's output. A run either completes with a document
//! per populated sheet or aborts with a diagnostic naming the offending part.

use std::collections::HashMap;
use tracing::{debug, info};

use sheetkit_model::{ConfigError, ExportConfig, FlatPart, PartNode, Process};

use crate::error::{ExportError, ExportResult};
use crate::extract::extract;
use crate::pack::{PackRequest, Packer};
use crate::path::{loop_to_commands, translate, PathCommand};
use crate::svg::{PlacedPart, SheetDocument};

/// Runs the full lasercut export for the part tree rooted at `root`.
///
/// Returns one document per sheet that received at least one part; an empty
/// tree yields no documents. Any malformed boundary or unplaceable part
/// aborts the whole run.
pub fn export_lasercut(root: &PartNode, config: &ExportConfig) -> ExportResult<Vec<SheetDocument>> {
    config.validate()?;
    if config.rotation_allowed {
        return Err(ConfigError::Unsupported(
            "packing with part rotation is not implemented".to_string(),
        )
        .into());
    }

    let parts = extract(root, Process::Lasercut)?;
    let total_area: f64 = parts.iter().map(|p| p.area()).sum();
    info!(
        "extracted {} lasercut parts ({:.1} mm^2 of stock before padding)",
        parts.len(),
        total_area
    );
    if parts.is_empty() {
        return Ok(Vec::new());
    }

    let outlines: Vec<Vec<PathCommand>> = parts
        .iter()
        .map(part_commands)
        .collect::<ExportResult<_>>()?;

    let gap = config.gap;
    let requests: Vec<PackRequest> = parts
        .iter()
        .map(|p| PackRequest::new(p.name(), p.width() + 2.0 * gap, p.height() + 2.0 * gap))
        .collect();

    let mut packer = Packer::new(&config.sheets);
    let placements = packer.pack(&requests)?;
    let sheets = packer.open_sheets();
    info!("packed {} parts onto {} sheets", placements.len(), sheets.len());

    let index: HashMap<&str, usize> = parts
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name(), i))
        .collect();

    let mut documents: Vec<SheetDocument> = sheets
        .iter()
        .enumerate()
        .map(|(i, s)| SheetDocument {
            sheet: i,
            width: s.width,
            height: s.height,
            parts: Vec::new(),
        })
        .collect();

    for placement in &placements {
        let part_index = index[placement.id.as_str()];
        let part = &parts[part_index];
        // Undo the padding and move the part's own origin to the placement
        // slot.
        let dx = placement.x + gap - part.bounds().x;
        let dy = placement.y + gap - part.bounds().y;
        debug!(
            "part '{}' -> sheet {} at ({:.1}, {:.1})",
            placement.id, placement.sheet, placement.x, placement.y
        );
        documents[placement.sheet].parts.push(PlacedPart {
            name: placement.id.clone(),
            commands: translate(&outlines[part_index], dx, dy),
        });
    }

    // Every opened sheet holds at least one part, but keep the contract
    // explicit: empty sheets are omitted from the output.
    documents.retain(|d| !d.parts.is_empty());
    Ok(documents)
}

/// All of a part's contours as one command sequence (outer profile plus any
/// hole loops as subpaths).
fn part_commands(part: &FlatPart) -> ExportResult<Vec<PathCommand>> {
    let mut commands = Vec::new();
    for (loop_index, outline) in part.outline().iter().enumerate() {
        let loop_commands =
            loop_to_commands(outline).map_err(|defect| ExportError::MalformedBoundary {
                part: part.name().to_string(),
                loop_index,
                defect,
            })?;
        commands.extend(loop_commands);
    }
    if commands.is_empty() {
        return Err(ExportError::MalformedBoundary {
            part: part.name().to_string(),
            loop_index: 0,
            defect: sheetkit_model::BoundaryDefect::Empty,
        });
    }
    Ok(commands)
}
