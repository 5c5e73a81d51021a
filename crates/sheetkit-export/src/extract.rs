//! Classifier/extractor: finds manufacturable leaf parts in an assembly tree.
//!
//! Traversal is depth-first pre-order, visiting an assembly's children in
//! their declared order. Each leaf is named after the key it is held under in
//! its parent; repeated names get a zero-padded numeric suffix so the result
//! names are unique across the whole run. The name counter advances for every
//! leaf visited, tagged or not, so adding a process tag to a part never
//! renames its siblings.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use sheetkit_model::{FlatPart, PartNode, Process};

use crate::error::{ExportError, ExportResult};

/// Accumulates flat parts for one manufacturing process during a tree scan.
pub struct Extractor {
    process: Process,
    track: HashMap<String, usize>,
    parts: Vec<FlatPart>,
}

impl Extractor {
    pub fn new(process: Process) -> Self {
        Self {
            process,
            track: HashMap::new(),
            parts: Vec::new(),
        }
    }

    /// Visits `node` (named `name` in its parent) and everything below it.
    pub fn scan(&mut self, node: &PartNode, name: &str) {
        match node {
            PartNode::Part(leaf) => {
                let resolved = self.resolve_name(name);
                if leaf.processes.contains(&self.process) {
                    debug!(
                        "extracted {} part '{}' ({}x{} mm)",
                        self.process, resolved, leaf.bounds.width, leaf.bounds.height
                    );
                    self.parts.push(FlatPart::new(
                        resolved,
                        leaf.bounds,
                        leaf.outline.clone(),
                        leaf.material.clone(),
                    ));
                }
            }
            PartNode::Assembly { children } => {
                for (child_name, child) in children {
                    self.scan(child, child_name);
                }
            }
        }
    }

    /// First use of a base name keeps it; later uses get `_%03d` suffixes.
    fn resolve_name(&mut self, name: &str) -> String {
        let count = self.track.entry(name.to_string()).or_insert(0);
        let ordinal = *count;
        *count += 1;
        if ordinal == 0 {
            name.to_string()
        } else {
            format!("{}_{:03}", name, ordinal)
        }
    }

    /// Finishes the scan, re-checking the uniqueness invariant.
    pub fn into_parts(self) -> ExportResult<Vec<FlatPart>> {
        let mut seen = HashSet::new();
        for part in &self.parts {
            if !seen.insert(part.name().to_string()) {
                return Err(ExportError::DuplicateName(part.name().to_string()));
            }
        }
        Ok(self.parts)
    }
}

/// Extracts all leaf parts tagged for `process` from the tree rooted at
/// `root`, in visitation order, with unique names.
///
/// The root node itself is visited under the name `"root"`; in the common
/// case the root is an assembly and the name never surfaces.
pub fn extract(root: &PartNode, process: Process) -> ExportResult<Vec<FlatPart>> {
    let mut extractor = Extractor::new(process);
    extractor.scan(root, "root");
    extractor.into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetkit_model::{PartLeaf, Rect};

    fn panel(width: f64, height: f64) -> PartNode {
        PartNode::lasercut_panel(Rect::new(0.0, 0.0, width, height))
    }

    fn printed() -> PartNode {
        PartNode::Part(PartLeaf {
            processes: vec![Process::Print],
            material: Some("red_abs".to_string()),
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            outline: vec![],
        })
    }

    #[test]
    fn test_empty_tree_yields_no_parts() {
        let root = PartNode::assembly(vec![]);
        let parts = extract(&root, Process::Lasercut).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_names_follow_child_keys_in_order() {
        let root = PartNode::assembly(vec![
            ("panelA".to_string(), panel(50.0, 50.0)),
            ("panelB".to_string(), panel(30.0, 70.0)),
        ]);
        let parts = extract(&root, Process::Lasercut).unwrap();
        let names: Vec<&str> = parts.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["panelA", "panelB"]);
    }

    #[test]
    fn test_repeated_names_get_suffixes() {
        // Three leaves all named "left" under different parent assemblies.
        let root = PartNode::assembly(vec![
            (
                "front".to_string(),
                PartNode::assembly(vec![("left".to_string(), panel(40.0, 20.0))]),
            ),
            (
                "middle".to_string(),
                PartNode::assembly(vec![("left".to_string(), panel(40.0, 20.0))]),
            ),
            (
                "back".to_string(),
                PartNode::assembly(vec![("left".to_string(), panel(40.0, 20.0))]),
            ),
        ]);
        let parts = extract(&root, Process::Lasercut).unwrap();
        let names: Vec<&str> = parts.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["left", "left_001", "left_002"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let root = PartNode::assembly(vec![
            ("side".to_string(), panel(10.0, 10.0)),
            (
                "inner".to_string(),
                PartNode::assembly(vec![("side".to_string(), panel(20.0, 20.0))]),
            ),
        ]);
        let first = extract(&root, Process::Lasercut).unwrap();
        let second = extract(&root, Process::Lasercut).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_untagged_leaves_are_skipped_but_counted() {
        // The printed "bracket" consumes the bare name, so the lasercut
        // "bracket" after it gets the first suffix.
        let root = PartNode::assembly(vec![
            ("bracket".to_string(), printed()),
            ("bracket".to_string(), panel(25.0, 25.0)),
        ]);
        let parts = extract(&root, Process::Lasercut).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name(), "bracket_001");
    }

    #[test]
    fn test_filter_by_process() {
        let root = PartNode::assembly(vec![
            ("mount".to_string(), printed()),
            ("plate".to_string(), panel(60.0, 40.0)),
        ]);
        let lasercut = extract(&root, Process::Lasercut).unwrap();
        assert_eq!(lasercut.len(), 1);
        assert_eq!(lasercut[0].name(), "plate");

        let printable = extract(&root, Process::Print).unwrap();
        assert_eq!(printable.len(), 1);
        assert_eq!(printable[0].name(), "mount");
        assert_eq!(printable[0].material(), Some("red_abs"));
    }

    #[test]
    fn test_deeply_nested_assemblies_are_traversed() {
        let mut node = panel(15.0, 15.0);
        for depth in 0..20 {
            node = PartNode::assembly(vec![(format!("level{}", depth), node)]);
        }
        let parts = extract(&node, Process::Lasercut).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name(), "level0");
    }
}
