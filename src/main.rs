use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;

use sheetkit::{export_lasercut, init_logging, write_documents, ExportConfig, PartNode};

fn usage() -> ExitCode {
    eprintln!("usage: sheetkit <tree.json> [config.json] [out_dir]");
    eprintln!();
    eprintln!("  tree.json    part/assembly tree snapshot");
    eprintln!("  config.json  export configuration (gap, sheets); defaults apply if omitted");
    eprintln!("  out_dir      output directory for the SVG cut files (default: current dir)");
    ExitCode::from(2)
}

fn run(tree_path: &str, config_path: Option<&str>, out_dir: &str) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(tree_path)
        .with_context(|| format!("failed to read part tree {}", tree_path))?;
    let tree: PartNode = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse part tree {}", tree_path))?;

    let config = match config_path {
        Some(path) => ExportConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => ExportConfig::default(),
    };

    let documents = export_lasercut(&tree, &config)?;
    if documents.is_empty() {
        tracing::warn!("no lasercut parts found in {}", tree_path);
        return Ok(());
    }

    let written = write_documents(&documents, PathBuf::from(out_dir))?;
    for path in &written {
        tracing::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    if init_logging().is_err() {
        eprintln!("warning: logging already initialized");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (tree_path, config_path, out_dir) = match args.len() {
        1 => (args[0].as_str(), None, "."),
        2 => (args[0].as_str(), Some(args[1].as_str()), "."),
        3 => (args[0].as_str(), Some(args[1].as_str()), args[2].as_str()),
        _ => return usage(),
    };

    match run(tree_path, config_path, out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
