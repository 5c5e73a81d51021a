//! The part/assembly tree handed over by the parametric CAD layer, and the
//! flat parts the classifier carves out of it.
//!
//! The tree is a closed two-variant union: an assembly only aggregates named
//! children, a part carries geometry plus zero or more manufacturing tags.
//! A snapshot of the tree is taken per export run and never mutated.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundaryLoop, Rect};

/// Manufacturing process a part is tagged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Process {
    /// Flat part cut from sheet stock.
    Lasercut,
    /// 3D-printed part.
    Print,
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lasercut => write!(f, "lasercut"),
            Self::Print => write!(f, "print"),
        }
    }
}

/// A terminal, geometry-bearing node of the part tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartLeaf {
    /// Manufacturing processes this part is suitable for.
    #[serde(default)]
    pub processes: Vec<Process>,
    /// Material name, when the part catalog specifies one.
    #[serde(default)]
    pub material: Option<String>,
    /// Axis-aligned bounding box of the part projected onto the extraction
    /// plane, in part-local coordinates.
    pub bounds: Rect,
    /// Planar boundary of the bottom face: outer profile first, then any
    /// interior hole contours.
    pub outline: Vec<BoundaryLoop>,
}

/// A node of the part/assembly tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartNode {
    /// Aggregates named children. Child order is the declared enumeration
    /// order and is significant: sibling name disambiguation depends on it.
    Assembly { children: Vec<(String, PartNode)> },
    Part(PartLeaf),
}

impl PartNode {
    pub fn assembly(children: Vec<(String, PartNode)>) -> Self {
        Self::Assembly { children }
    }

    pub fn part(leaf: PartLeaf) -> Self {
        Self::Part(leaf)
    }

    /// Leaf with a single-loop outline derived from its bounds.
    pub fn lasercut_panel(bounds: Rect) -> Self {
        Self::Part(PartLeaf {
            processes: vec![Process::Lasercut],
            material: None,
            bounds,
            outline: vec![BoundaryLoop::rectangle(
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
            )],
        })
    }
}

/// A named, manufacturable flat part selected by the classifier.
///
/// Immutable once created; the name is unique within an export run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPart {
    name: String,
    bounds: Rect,
    outline: Vec<BoundaryLoop>,
    material: Option<String>,
}

impl FlatPart {
    pub fn new(
        name: String,
        bounds: Rect,
        outline: Vec<BoundaryLoop>,
        material: Option<String>,
    ) -> Self {
        Self {
            name,
            bounds,
            outline,
            material,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    /// Area of the part's bounding box, used for stock usage reporting.
    pub fn area(&self) -> f64 {
        self.bounds.area()
    }

    pub fn outline(&self) -> &[BoundaryLoop] {
        &self.outline
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }
}
