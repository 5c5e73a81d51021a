//! File output tests for the root facade.

use sheetkit::{export_lasercut, write_documents, ExportConfig, PartNode, Rect, SheetSpec};

fn panel(width: f64, height: f64) -> PartNode {
    PartNode::lasercut_panel(Rect::new(0.0, 0.0, width, height))
}

#[test]
fn test_single_sheet_written_as_layout_svg() {
    let root = PartNode::assembly(vec![
        ("base".to_string(), panel(50.0, 50.0)),
        ("lid".to_string(), panel(30.0, 70.0)),
    ]);
    let config = ExportConfig {
        gap: 3.0,
        sheets: vec![SheetSpec::new(200.0, 200.0, None)],
        rotation_allowed: false,
    };
    let documents = export_lasercut(&root, &config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let written = write_documents(&documents, dir.path()).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].file_name().unwrap(), "layout.svg");

    let contents = std::fs::read_to_string(&written[0]).unwrap();
    assert!(contents.starts_with("<?xml version=\"1.0\" standalone=\"no\"?>"));
    assert!(contents.contains("<path id=\"base\""));
    assert!(contents.contains("<path id=\"lid\""));
}

#[test]
fn test_multiple_sheets_get_indexed_names() {
    let children: Vec<(String, PartNode)> = (0..3)
        .map(|i| (format!("plate{}", i), panel(90.0, 90.0)))
        .collect();
    let root = PartNode::assembly(children);
    let config = ExportConfig {
        gap: 3.0,
        sheets: vec![SheetSpec::new(100.0, 100.0, None)],
        rotation_allowed: false,
    };
    let documents = export_lasercut(&root, &config).unwrap();
    assert_eq!(documents.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let written = write_documents(&documents, dir.path()).unwrap();
    let names: Vec<&str> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["layout_000.svg", "layout_001.svg", "layout_002.svg"]);
}
