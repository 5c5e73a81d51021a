//! Error types for the model crate.

use std::io;
use thiserror::Error;

/// Defects found while validating a boundary loop.
///
/// A defect means the upstream face-boundary extraction produced geometry the
/// export pipeline cannot trust; the caller decides whether to abort the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryDefect {
    /// The loop contains no edges.
    #[error("loop has no edges")]
    Empty,

    /// An edge does not start where the previous edge ended.
    #[error("edge {index} is discontinuous with its successor (gap {gap:.6} mm)")]
    Discontinuous { index: usize, gap: f64 },

    /// The last edge does not return to the loop's start point.
    #[error("loop is not closed (end drifts {gap:.6} mm from start)")]
    Open { gap: f64 },

    /// An arc edge has a zero or negative radius.
    #[error("arc edge {index} has non-positive radius {radius}")]
    NonPositiveRadius { index: usize, radius: f64 },

    /// An arc edge has identical start and end angles.
    #[error("arc edge {index} has identical start and end angles")]
    DegenerateArc { index: usize },
}

/// Errors related to export configuration handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of its valid range.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// The configuration requests a feature that is not implemented.
    #[error("unsupported configuration: {0}")]
    Unsupported(String),

    /// I/O error while reading or writing a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
