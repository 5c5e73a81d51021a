//! Sheet packer: places padded bounding rectangles onto stock sheets.
//!
//! Shelf-based first-fit, no rotation. Requests are handled in the order
//! given and sheet instances are opened in configuration order, so the same
//! input always produces the same layout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sheetkit_model::SheetSpec;

use crate::error::{ExportError, ExportResult};

/// A rectangle to place: a part's bounding box already padded with the gap
/// margin on every side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackRequest {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl PackRequest {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Where a request landed: lower-left corner of the padded rectangle in
/// sheet coordinates, plus the index of the sheet it was placed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub sheet: usize,
}

/// One row of placed rectangles on a sheet. The shelf height is fixed by its
/// first occupant; later occupants only need to fit under it.
#[derive(Debug)]
struct Shelf {
    y: f64,
    height: f64,
    cursor: f64,
}

/// An opened sheet instance.
#[derive(Debug)]
struct OpenSheet {
    width: f64,
    height: f64,
    shelves: Vec<Shelf>,
    /// Y coordinate where the next new shelf would start.
    top: f64,
}

impl OpenSheet {
    fn new(spec: &SheetSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            shelves: Vec::new(),
            top: 0.0,
        }
    }

    fn try_place(&mut self, width: f64, height: f64) -> Option<(f64, f64)> {
        for shelf in &mut self.shelves {
            if height <= shelf.height && shelf.cursor + width <= self.width {
                let position = (shelf.cursor, shelf.y);
                shelf.cursor += width;
                return Some(position);
            }
        }
        if width <= self.width && self.top + height <= self.height {
            let y = self.top;
            self.shelves.push(Shelf {
                y,
                height,
                cursor: width,
            });
            self.top += height;
            return Some((0.0, y));
        }
        None
    }
}

/// Dimensions of a sheet instance opened during packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenSheetInfo {
    pub width: f64,
    pub height: f64,
}

/// Packs rectangles onto sheet instances drawn from a fixed set of specs.
pub struct Packer {
    specs: Vec<SheetSpec>,
    remaining: Vec<Option<u32>>,
    open: Vec<OpenSheet>,
}

impl Packer {
    pub fn new(specs: &[SheetSpec]) -> Self {
        Self {
            specs: specs.to_vec(),
            remaining: specs.iter().map(|s| s.count).collect(),
            open: Vec::new(),
        }
    }

    /// Places every request or fails; no partial result escapes.
    ///
    /// Placement order is the request order. Each request goes to the first
    /// open sheet with room under the shelf heuristic; a new sheet is opened
    /// (specs tried in order, bounded by their counts) only when every open
    /// sheet is full.
    pub fn pack(&mut self, requests: &[PackRequest]) -> ExportResult<Vec<Placement>> {
        // Reject oversized requests before any sheet is opened.
        for request in requests {
            let fits_somewhere = self
                .specs
                .iter()
                .any(|s| request.width <= s.width && request.height <= s.height);
            if !fits_somewhere {
                return Err(ExportError::UnplaceableRequest {
                    id: request.id.clone(),
                    width: request.width,
                    height: request.height,
                });
            }
        }

        let mut placements = Vec::with_capacity(requests.len());
        for request in requests {
            let placement = self.place(request)?;
            placements.push(placement);
        }
        Ok(placements)
    }

    fn place(&mut self, request: &PackRequest) -> ExportResult<Placement> {
        for (sheet_index, sheet) in self.open.iter_mut().enumerate() {
            if let Some((x, y)) = sheet.try_place(request.width, request.height) {
                return Ok(Placement {
                    id: request.id.clone(),
                    x,
                    y,
                    sheet: sheet_index,
                });
            }
        }

        // All open sheets are full; open the first spec that still has stock
        // and can hold this request at all.
        for (spec_index, spec) in self.specs.iter().enumerate() {
            if request.width > spec.width || request.height > spec.height {
                continue;
            }
            match self.remaining[spec_index] {
                Some(0) => continue,
                Some(ref mut n) => *n -= 1,
                None => {}
            }
            debug!(
                "opening sheet {} ({}x{} mm)",
                self.open.len(),
                spec.width,
                spec.height
            );
            let mut sheet = OpenSheet::new(spec);
            // Fits the empty sheet by the pre-check above.
            let (x, y) = match sheet.try_place(request.width, request.height) {
                Some(position) => position,
                None => {
                    return Err(ExportError::UnplaceableRequest {
                        id: request.id.clone(),
                        width: request.width,
                        height: request.height,
                    })
                }
            };
            self.open.push(sheet);
            return Ok(Placement {
                id: request.id.clone(),
                x,
                y,
                sheet: self.open.len() - 1,
            });
        }

        Err(ExportError::UnplaceableRequest {
            id: request.id.clone(),
            width: request.width,
            height: request.height,
        })
    }

    /// Sheets opened so far, in placement order.
    pub fn open_sheets(&self) -> Vec<OpenSheetInfo> {
        self.open
            .iter()
            .map(|s| OpenSheetInfo {
                width: s.width,
                height: s.height,
            })
            .collect()
    }
}

/// One-shot packing of `requests` against `sheets`.
pub fn pack(requests: &[PackRequest], sheets: &[SheetSpec]) -> ExportResult<Vec<Placement>> {
    Packer::new(sheets).pack(requests)
}
