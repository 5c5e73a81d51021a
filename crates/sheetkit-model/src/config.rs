//! Export configuration: gap margin and available stock sheets.
//!
//! Stored as JSON next to the part catalog; all lengths in millimetres.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// One kind of stock sheet available to the packer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
    /// How many sheets of this size may be opened. `None` means unlimited.
    #[serde(default)]
    pub count: Option<u32>,
}

impl SheetSpec {
    pub fn new(width: f64, height: f64, count: Option<u32>) -> Self {
        Self {
            width,
            height,
            count,
        }
    }
}

/// Configuration surface consumed by the export pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Margin between parts and between a part and the sheet edge, in mm.
    pub gap: f64,
    /// Stock sheets, tried in order when opening a new sheet instance.
    pub sheets: Vec<SheetSpec>,
    /// Extension point: packing with 90-degree rotation. Parsed but not
    /// implemented; the pipeline rejects a config that enables it.
    pub rotation_allowed: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            gap: 6.0,
            sheets: vec![SheetSpec::new(1024.0, 1024.0, Some(10))],
            rotation_allowed: false,
        }
    }
}

impl ExportConfig {
    /// Validates ranges; does not check feasibility of any particular layout.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.gap > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "gap".to_string(),
                reason: format!("must be positive, got {}", self.gap),
            });
        }
        if self.sheets.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "sheets".to_string(),
                reason: "at least one sheet size is required".to_string(),
            });
        }
        for (i, sheet) in self.sheets.iter().enumerate() {
            if !(sheet.width > 0.0) || !(sheet.height > 0.0) {
                return Err(ConfigError::InvalidValue {
                    name: format!("sheets[{}]", i),
                    reason: format!(
                        "dimensions must be positive, got {}x{}",
                        sheet.width, sheet.height
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
