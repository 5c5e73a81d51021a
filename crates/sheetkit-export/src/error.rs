//! Error types for the export pipeline.
//!
//! Every error carries the resolved part name where one applies, so a failure
//! can be traced back to a specific CAD part. Nothing here retries: geometry
//! and layout failures are deterministic for a given input.

use thiserror::Error;

use sheetkit_model::{BoundaryDefect, ConfigError};

/// Errors raised by the export pipeline.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A part's boundary loop is unusable as a cut contour. Indicates an
    /// upstream face-extraction bug; the run is aborted rather than silently
    /// dropping the part.
    #[error("malformed boundary in part '{part}' (loop {loop_index}): {defect}")]
    MalformedBoundary {
        part: String,
        loop_index: usize,
        defect: BoundaryDefect,
    },

    /// A padded rectangle fits on no configured sheet, or every allowed sheet
    /// instance is full. Fatal: partial layouts are never emitted.
    #[error("part '{id}' ({width}x{height} mm padded) cannot be placed on any available sheet")]
    UnplaceableRequest { id: String, width: f64, height: f64 },

    /// Two extracted parts ended up with the same name. Unreachable by
    /// construction of the suffixing rule; reported as an internal invariant
    /// violation rather than a user error.
    #[error("internal error: duplicate part name '{0}' after disambiguation")]
    DuplicateName(String),

    /// The export configuration is invalid or requests an unimplemented
    /// feature.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_boundary_display() {
        let err = ExportError::MalformedBoundary {
            part: "panel".to_string(),
            loop_index: 1,
            defect: BoundaryDefect::Empty,
        };
        assert_eq!(
            err.to_string(),
            "malformed boundary in part 'panel' (loop 1): loop has no edges"
        );
    }

    #[test]
    fn test_unplaceable_display() {
        let err = ExportError::UnplaceableRequest {
            id: "base".to_string(),
            width: 300.0,
            height: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "part 'base' (300x120 mm padded) cannot be placed on any available sheet"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ExportError = ConfigError::Unsupported("rotation".to_string()).into();
        assert!(matches!(err, ExportError::Config(_)));
    }
}
